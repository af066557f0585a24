use crate::core::ConfigProvider;
use crate::domain::model::{OutputFormat, ParseErrorPolicy, DEFAULT_DATE_FORMAT};
use crate::utils::error::{PairError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_one_of, validate_path, Validate,
};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
    pub date_format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// 固定參考日期，未設定時使用執行當天
    pub now: Option<NaiveDate>,
    #[serde(default)]
    pub on_parse_error: ParseErrorPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            formats: default_formats(),
        }
    }
}

fn default_output_path() -> String {
    "./output".to_string()
}

fn default_formats() -> Vec<String> {
    vec!["table".to_string()]
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PairError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PairError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數視為錯誤
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PairError::ConfigError {
            message: e.to_string(),
        })?;

        if let Some(missing) = re
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .find(|name| std::env::var(name).is_err())
        {
            return Err(PairError::ConfigValidationError {
                field: missing.clone(),
                message: format!("Environment variable '{}' is not set", missing),
            });
        }

        let result = re.replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        Ok(result.into_owned())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> Vec<OutputFormat> {
        self.output
            .formats
            .iter()
            .filter_map(|name| OutputFormat::parse(name))
            .collect()
    }

    fn date_format(&self) -> &str {
        self.input.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }

    fn reference_date(&self) -> Option<NaiveDate> {
        self.run.now
    }

    fn parse_error_policy(&self) -> ParseErrorPolicy {
        self.run.on_parse_error
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.path", &self.input.path)?;
        validate_file_extension("input.path", &self.input.path, &["csv"])?;
        validate_non_empty_string("input.date_format", self.date_format())?;
        validate_path("output.path", &self.output.path)?;
        validate_one_of("output.formats", &self.output.formats, &OutputFormat::NAMES)?;
        Ok(())
    }
}
