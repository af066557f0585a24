use crate::domain::model::{OutputFormat, ParseErrorPolicy, RawRecord, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> Vec<OutputFormat>;
    fn date_format(&self) -> &str;
    /// `None` 代表使用執行當下的日期
    fn reference_date(&self) -> Option<NaiveDate>;
    fn parse_error_policy(&self) -> ParseErrorPolicy;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawRecord>>;
    async fn transform(&self, data: Vec<RawRecord>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
