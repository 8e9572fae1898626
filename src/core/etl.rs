use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 依序執行三個階段；任一階段失敗即中止，load 之前不會寫出任何檔案
    pub async fn run(&self) -> Result<String> {
        tracing::debug!("Extracting...");
        let extracted = self.pipeline.extract().await?;

        tracing::debug!("Transforming...");
        let transformed = self.pipeline.transform(extracted).await?;

        tracing::debug!("Loading...");
        let output_path = self.pipeline.load(transformed).await?;
        tracing::info!("📁 Output saved to: {}", output_path);

        Ok(output_path)
    }
}
