use crate::core::parser::{parse_metadata_bytes, ParserOptions};
use crate::core::{ConfigProvider, MetadataRecord, Pipeline, Storage};
use crate::utils::error::Result;

/// CSV 匯出 -> 中繼 JSON
pub struct ImportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    input_path: String,
    output_path: Option<String>,
}

impl<S: Storage, C: ConfigProvider> ImportPipeline<S, C> {
    pub fn new(storage: S, config: C, input_path: impl Into<String>) -> Self {
        Self {
            storage,
            config,
            input_path: input_path.into(),
            output_path: None,
        }
    }

    pub fn with_output(mut self, output_path: Option<String>) -> Self {
        self.output_path = output_path;
        self
    }

    /// 預設輸出在輸入檔旁：`<csvFile>.json`
    pub fn target_path(&self) -> String {
        self.output_path
            .clone()
            .unwrap_or_else(|| format!("{}.json", self.input_path))
    }

    fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            header_marker: self.config.header_marker().to_string(),
            delimiter: self.config.delimiter(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ImportPipeline<S, C> {
    type Extracted = MetadataRecord;
    type Transformed = String;

    async fn extract(&self) -> Result<MetadataRecord> {
        tracing::debug!("Reading metadata export from: {}", self.input_path);
        let bytes = self.storage.read_file(&self.input_path).await?;
        let record = parse_metadata_bytes(&bytes, &self.parser_options())?;

        tracing::info!(
            "📥 Parsed {} field records across {} groups",
            record.record_count(),
            record.group_count()
        );
        if record.is_empty() {
            tracing::warn!("⚠️ Header row found but no data rows follow it");
        }
        Ok(record)
    }

    async fn transform(&self, data: MetadataRecord) -> Result<String> {
        Ok(serde_json::to_string_pretty(&data)?)
    }

    async fn load(&self, result: String) -> Result<String> {
        let target = self.target_path();
        tracing::debug!("Writing {} bytes of JSON", result.len());
        self.storage.write_file(&target, result.as_bytes()).await?;
        Ok(self.storage.resolve(&target))
    }
}
