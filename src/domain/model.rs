use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const EMP_ID: &str = "EmpID";
pub const PROJECT_ID: &str = "ProjectID";
pub const DATE_FROM: &str = "DateFrom";
pub const DATE_TO: &str = "DateTo";

/// 仍在進行中的指派以此字串表示結束日
pub const OPEN_ENDED: &str = "NULL";

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// One input row as handed over by the ingestion side: column name to raw text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    pub data: HashMap<String, String>,
}

impl RawRecord {
    pub fn new(emp_id: &str, project_id: &str, date_from: &str, date_to: &str) -> Self {
        let mut data = HashMap::new();
        data.insert(EMP_ID.to_string(), emp_id.to_string());
        data.insert(PROJECT_ID.to_string(), project_id.to_string());
        data.insert(DATE_FROM.to_string(), date_from.to_string());
        data.insert(DATE_TO.to_string(), date_to.to_string());
        Self { data }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.data.get(field).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub employee_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Interval {
    pub fn new(employee_id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            start,
            end,
        }
    }

    pub fn length_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Intervals keyed by project, iterated in the order each project was first seen.
#[derive(Debug, Clone, Default)]
pub struct ProjectGroups {
    order: Vec<String>,
    intervals: HashMap<String, Vec<Interval>>,
}

impl ProjectGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, project_id: &str, interval: Interval) {
        match self.intervals.get_mut(project_id) {
            Some(list) => list.push(interval),
            None => {
                self.order.push(project_id.to_string());
                self.intervals
                    .insert(project_id.to_string(), vec![interval]);
            }
        }
    }

    pub fn get(&self, project_id: &str) -> Option<&[Interval]> {
        self.intervals.get(project_id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Interval])> + '_ {
        self.order.iter().filter_map(move |id| {
            self.intervals
                .get(id)
                .map(|list| (id.as_str(), list.as_slice()))
        })
    }

    pub fn project_ids(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairResult {
    pub project_id: String,
    pub employee_id_1: String,
    pub employee_id_2: String,
    pub days_overlap: i64,
}

pub type ResultSet = Vec<PairResult>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseErrorPolicy {
    #[default]
    #[serde(alias = "fail-fast")]
    Fail,
    Skip,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub now: NaiveDate,
    pub date_format: String,
    pub on_parse_error: ParseErrorPolicy,
}

impl RunOptions {
    pub fn new(now: NaiveDate) -> Self {
        Self {
            now,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            on_parse_error: ParseErrorPolicy::Fail,
        }
    }

    /// 以當下日期作為參考日
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn with_policy(mut self, policy: ParseErrorPolicy) -> Self {
        self.on_parse_error = policy;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["table", "csv", "json"];

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub results: ResultSet,
    pub records_read: usize,
    pub skipped_rows: usize,
    pub project_count: usize,
}
