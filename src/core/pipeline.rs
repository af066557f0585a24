use crate::core::driver::run_with_summary;
use crate::core::report::{render_table, to_csv, to_json};
use crate::core::{ConfigProvider, Pipeline, RawRecord, Storage, TransformResult};
use crate::domain::model::{OutputFormat, RunOptions};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::path::Path;

pub const CSV_OUTPUT_FILE: &str = "pair_overlap.csv";
pub const JSON_OUTPUT_FILE: &str = "pair_overlap.json";

pub struct CsvPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn run_options(&self) -> RunOptions {
        let options = match self.config.reference_date() {
            Some(now) => RunOptions::new(now),
            None => RunOptions::today(),
        };

        options
            .with_date_format(self.config.date_format())
            .with_policy(self.config.parse_error_policy())
    }

    fn output_file(&self, name: &str) -> String {
        Path::new(self.config.output_path())
            .join(name)
            .to_string_lossy()
            .into_owned()
    }
}

/// Parses CSV text with a header row into raw records.
///
/// Headers and cells are trimmed, blank lines and all-empty rows are dropped.
/// Short rows are accepted; their missing columns surface later as missing fields.
pub fn parse_csv(data: &[u8]) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        if row.iter().all(str::is_empty) {
            continue;
        }

        let data: HashMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        records.push(RawRecord { data });
    }

    Ok(records)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CsvPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawRecord>> {
        tracing::debug!("Reading assignments from: {}", self.config.input_path());
        let bytes = self.storage.read_file(self.config.input_path()).await?;
        let records = parse_csv(&bytes)?;

        if records.is_empty() {
            tracing::warn!("Input file contains no assignment rows");
        }

        Ok(records)
    }

    async fn transform(&self, data: Vec<RawRecord>) -> Result<TransformResult> {
        let options = self.run_options();
        tracing::debug!(
            "Reference date: {}, date format: {}, on parse error: {:?}",
            options.now,
            options.date_format,
            options.on_parse_error
        );

        run_with_summary(&data, &options)
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let mut outputs = Vec::new();

        for format in self.config.output_formats() {
            match format {
                OutputFormat::Table => {
                    println!("{}", render_table(&result.results));
                    outputs.push("stdout".to_string());
                }
                OutputFormat::Csv => {
                    let path = self.output_file(CSV_OUTPUT_FILE);
                    let data = to_csv(&result.results)?;
                    tracing::debug!("Writing CSV ({} bytes) to {}", data.len(), path);
                    self.storage.write_file(&path, &data).await?;
                    outputs.push(path);
                }
                OutputFormat::Json => {
                    let path = self.output_file(JSON_OUTPUT_FILE);
                    let data = to_json(&result.results)?;
                    tracing::debug!("Writing JSON ({} bytes) to {}", data.len(), path);
                    self.storage.write_file(&path, &data).await?;
                    outputs.push(path);
                }
            }
        }

        Ok(outputs.join(", "))
    }
}
