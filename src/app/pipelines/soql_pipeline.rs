use crate::core::schema::{parse_schema_bytes, SchemaDocument};
use crate::core::soql::generate_statements;
use crate::core::{ConfigProvider, GeneratedArtifact, Pipeline, Storage};
use crate::domain::model::StatementForm;
use crate::utils::error::Result;

pub struct SoqlPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    input_path: String,
    form: StatementForm,
}

impl<S: Storage, C: ConfigProvider> SoqlPipeline<S, C> {
    pub fn new(storage: S, config: C, input_path: impl Into<String>, form: StatementForm) -> Self {
        Self {
            storage,
            config,
            input_path: input_path.into(),
            form,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SoqlPipeline<S, C> {
    type Extracted = SchemaDocument;
    type Transformed = GeneratedArtifact;

    async fn extract(&self) -> Result<SchemaDocument> {
        tracing::debug!("Reading metadata JSON from: {}", self.input_path);
        let bytes = self.storage.read_file(&self.input_path).await?;
        let document = parse_schema_bytes(&bytes).inspect_err(|e| {
            tracing::error!("❌ Failed to parse {}: {}", self.input_path, e);
        })?;
        Ok(document)
    }

    async fn transform(&self, data: SchemaDocument) -> Result<GeneratedArtifact> {
        let artifact = generate_statements(&data, self.form);
        tracing::info!(
            "🛠️ Generated {} {:?} statements ({} fields, {} objects skipped)",
            artifact.statements.len(),
            self.form,
            artifact.fields,
            artifact.skipped.len()
        );
        Ok(artifact)
    }

    async fn load(&self, result: GeneratedArtifact) -> Result<String> {
        let target = self.config.soql_output_file(self.form);
        self.storage
            .write_file(&target, result.render().as_bytes())
            .await?;
        Ok(self.storage.resolve(&target))
    }
}
