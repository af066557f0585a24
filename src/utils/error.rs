use thiserror::Error;

#[derive(Error, Debug)]
pub enum PairError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid date '{value}' (expected format '{format}'): {reason}")]
    DateParseError {
        value: String,
        format: String,
        reason: String,
    },

    #[error("Missing field '{field}' in row {row}")]
    MissingFieldError { field: String, row: usize },

    #[error("Row {row}: {source}")]
    RowError {
        row: usize,
        #[source]
        source: Box<PairError>,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PairError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PairError::CsvError(_)
            | PairError::DateParseError { .. }
            | PairError::MissingFieldError { .. } => ErrorCategory::Input,
            PairError::RowError { source, .. } => source.category(),
            PairError::ConfigError { .. }
            | PairError::ConfigValidationError { .. }
            | PairError::InvalidConfigValueError { .. }
            | PairError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PairError::IoError(_) | PairError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PairError::CsvError(e) => format!("The input file is not valid CSV: {}", e),
            PairError::IoError(e) => format!("Could not access a file: {}", e),
            PairError::SerializationError(e) => format!("Could not write results: {}", e),
            PairError::DateParseError { value, format, .. } => {
                format!("'{}' is not a date in format '{}'", value, format)
            }
            PairError::MissingFieldError { field, row } => {
                format!("Row {} has no value for column '{}'", row, field)
            }
            PairError::RowError { row, source } => {
                format!("Row {}: {}", row, source.user_friendly_message())
            }
            PairError::ConfigError { message } => format!("Configuration problem: {}", message),
            PairError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            PairError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting '{}' = '{}' is invalid: {}", field, value, reason)
            }
            PairError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PairError::CsvError(_) => "Check that the file has a header row and consistent columns",
            PairError::DateParseError { .. } => {
                "Fix the date, use NULL for open-ended assignments, or pass --skip-invalid"
            }
            PairError::MissingFieldError { .. } => {
                "Make sure every row has EmpID, ProjectID, DateFrom and DateTo"
            }
            PairError::RowError { source, .. } => source.recovery_suggestion(),
            PairError::IoError(_) => "Check the path exists and is readable/writable",
            PairError::SerializationError(_) => "Check the output directory and try again",
            PairError::ConfigError { .. }
            | PairError::ConfigValidationError { .. }
            | PairError::InvalidConfigValueError { .. }
            | PairError::MissingConfigError { .. } => "Review the command line flags or TOML config",
        }
    }
}

pub type Result<T> = std::result::Result<T, PairError>;
