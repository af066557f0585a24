pub mod dates;
pub mod driver;
pub mod etl;
pub mod grouping;
pub mod maximizer;
pub mod overlap;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{RawRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
