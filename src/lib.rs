pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::driver::run;
pub use crate::core::{etl::EtlEngine, pipeline::CsvPipeline};
pub use domain::model::{Interval, PairResult, ParseErrorPolicy, RawRecord, ResultSet, RunOptions};
pub use utils::error::{PairError, Result};
