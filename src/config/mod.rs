pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{OutputFormat, ParseErrorPolicy, DEFAULT_DATE_FORMAT};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_one_of, validate_path,
    validate_required_field, Validate,
};
#[cfg(feature = "cli")]
use chrono::NaiveDate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pair-overlap")]
#[command(about = "Find the employee pair that worked together longest on each project")]
pub struct CliConfig {
    /// CSV file with EmpID, ProjectID, DateFrom, DateTo columns
    #[arg(short, long)]
    pub input: Option<String>,

    /// Load settings from a TOML file instead of flags
    #[arg(short, long, conflicts_with = "input")]
    pub config: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Output formats: table, csv, json
    #[arg(long, value_delimiter = ',', default_value = "table")]
    pub format: Vec<String>,

    #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// Reference date (YYYY-MM-DD) used for NULL end dates, defaults to today
    #[arg(long)]
    pub now: Option<NaiveDate>,

    #[arg(long, help = "Skip rows with invalid dates or missing fields instead of failing")]
    pub skip_invalid: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> Vec<OutputFormat> {
        self.format
            .iter()
            .filter_map(|name| OutputFormat::parse(name))
            .collect()
    }

    fn date_format(&self) -> &str {
        &self.date_format
    }

    fn reference_date(&self) -> Option<NaiveDate> {
        self.now
    }

    fn parse_error_policy(&self) -> ParseErrorPolicy {
        if self.skip_invalid {
            ParseErrorPolicy::Skip
        } else {
            ParseErrorPolicy::Fail
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let input = validate_required_field("input", &self.input)?;
        validate_path("input", input)?;
        validate_file_extension("input", input, &["csv"])?;
        validate_non_empty_string("date_format", &self.date_format)?;
        validate_path("output_path", &self.output_path)?;
        validate_one_of("format", &self.format, &OutputFormat::NAMES)?;
        Ok(())
    }
}
