use crate::core::dates::normalize;
use crate::domain::model::{
    Interval, ParseErrorPolicy, ProjectGroups, RawRecord, RunOptions, DATE_FROM, DATE_TO, EMP_ID,
    PROJECT_ID,
};
use crate::utils::error::{PairError, Result};

#[derive(Debug, Default)]
pub struct Grouped {
    pub groups: ProjectGroups,
    pub skipped_rows: usize,
}

/// Builds per-project interval lists, keeping first-seen order of projects and intervals.
///
/// Rows are numbered from 1. Under [`ParseErrorPolicy::Fail`] the first bad row aborts the
/// whole call; under [`ParseErrorPolicy::Skip`] it is logged and dropped.
pub fn group(records: &[RawRecord], options: &RunOptions) -> Result<Grouped> {
    let mut grouped = Grouped::default();

    for (index, record) in records.iter().enumerate() {
        let row = index + 1;
        match to_interval(record, row, options) {
            Ok((project_id, interval)) => grouped.groups.push(project_id, interval),
            Err(e) => match options.on_parse_error {
                ParseErrorPolicy::Fail => {
                    return Err(PairError::RowError {
                        row,
                        source: Box::new(e),
                    })
                }
                ParseErrorPolicy::Skip => {
                    tracing::warn!("⚠️ Skipping row {}: {}", row, e);
                    grouped.skipped_rows += 1;
                }
            },
        }
    }

    Ok(grouped)
}

fn to_interval<'a>(
    record: &'a RawRecord,
    row: usize,
    options: &RunOptions,
) -> Result<(&'a str, Interval)> {
    let employee_id = required(record, EMP_ID, row)?;
    let project_id = required(record, PROJECT_ID, row)?;
    let start = normalize(required(record, DATE_FROM, row)?, options.now, &options.date_format)?;
    let end = normalize(required(record, DATE_TO, row)?, options.now, &options.date_format)?;

    Ok((project_id, Interval::new(employee_id, start, end)))
}

fn required<'a>(record: &'a RawRecord, name: &str, row: usize) -> Result<&'a str> {
    record
        .get(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| PairError::MissingFieldError {
            field: name.to_string(),
            row,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn options() -> RunOptions {
        RunOptions::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn test_groups_by_project_in_first_seen_order() {
        let records = vec![
            RawRecord::new("1", "B", "2020-01-01", "2020-02-01"),
            RawRecord::new("2", "A", "2020-01-01", "2020-02-01"),
            RawRecord::new("3", "B", "2020-01-15", "NULL"),
        ];

        let grouped = group(&records, &options()).unwrap();

        assert_eq!(grouped.groups.project_ids(), &["B".to_string(), "A".to_string()]);
        let b = grouped.groups.get("B").unwrap();
        assert_eq!(b.len(), 2);
        assert_eq!(b[0].employee_id, "1");
        assert_eq!(b[1].employee_id, "3");
        assert_eq!(b[1].end, options().now);
        assert_eq!(grouped.skipped_rows, 0);
    }

    #[test]
    fn test_repeated_assignment_is_kept() {
        let records = vec![
            RawRecord::new("1", "A", "2020-01-01", "2020-02-01"),
            RawRecord::new("1", "A", "2021-01-01", "2021-02-01"),
        ];

        let grouped = group(&records, &options()).unwrap();
        assert_eq!(grouped.groups.get("A").unwrap().len(), 2);
    }

    #[test]
    fn test_fail_fast_reports_row() {
        let records = vec![
            RawRecord::new("1", "A", "2020-01-01", "2020-02-01"),
            RawRecord::new("2", "A", "not-a-date", "2020-02-01"),
        ];

        let err = group(&records, &options()).unwrap_err();
        match err {
            PairError::RowError { row, source } => {
                assert_eq!(row, 2);
                assert!(matches!(*source, PairError::DateParseError { .. }));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_field() {
        let mut record = RawRecord::new("1", "A", "2020-01-01", "2020-02-01");
        record.data.remove(DATE_TO);

        let err = group(&[record], &options()).unwrap_err();
        match err {
            PairError::RowError { source, .. } => match *source {
                PairError::MissingFieldError { field, row } => {
                    assert_eq!(field, DATE_TO);
                    assert_eq!(row, 1);
                }
                other => panic!("unexpected error: {:?}", other),
            },
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_skip_policy_drops_bad_rows() {
        let records = vec![
            RawRecord::new("1", "A", "2020-01-01", "2020-02-01"),
            RawRecord::new("2", "A", "2020-01-01", "garbage"),
            RawRecord::new("", "A", "2020-01-01", "2020-02-01"),
            RawRecord::new("3", "A", "2020-01-10", "2020-02-01"),
        ];
        let options = options().with_policy(ParseErrorPolicy::Skip);

        let grouped = group(&records, &options).unwrap();

        assert_eq!(grouped.skipped_rows, 2);
        let ids: Vec<&str> = grouped
            .groups
            .get("A")
            .unwrap()
            .iter()
            .map(|i| i.employee_id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
