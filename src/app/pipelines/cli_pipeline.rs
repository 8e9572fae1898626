use crate::core::commands::CliCommandBuilder;
use crate::core::schema::{parse_schema_bytes, SchemaDocument};
use crate::core::{ConfigProvider, GeneratedArtifact, Pipeline, Storage};
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputSink {
    #[default]
    File,
    Stdout,
}

pub struct CliCommandPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    input_path: String,
    sink: OutputSink,
}

impl<S: Storage, C: ConfigProvider> CliCommandPipeline<S, C> {
    pub fn new(storage: S, config: C, input_path: impl Into<String>) -> Self {
        Self {
            storage,
            config,
            input_path: input_path.into(),
            sink: OutputSink::File,
        }
    }

    pub fn with_sink(mut self, sink: OutputSink) -> Self {
        self.sink = sink;
        self
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CliCommandPipeline<S, C> {
    type Extracted = SchemaDocument;
    type Transformed = GeneratedArtifact;

    async fn extract(&self) -> Result<SchemaDocument> {
        tracing::debug!("Reading metadata JSON from: {}", self.input_path);
        let bytes = self.storage.read_file(&self.input_path).await?;
        let document = parse_schema_bytes(&bytes).inspect_err(|e| {
            tracing::error!("❌ {} is not valid JSON metadata: {}", self.input_path, e);
        })?;
        Ok(document)
    }

    async fn transform(&self, data: SchemaDocument) -> Result<GeneratedArtifact> {
        let builder = CliCommandBuilder::new(self.config.cli_executable());
        let artifact = builder.generate(&data);
        tracing::info!(
            "🛠️ Generated {} commands for {} objects and {} fields",
            artifact.statements.len(),
            artifact.objects,
            artifact.fields
        );
        Ok(artifact)
    }

    async fn load(&self, result: GeneratedArtifact) -> Result<String> {
        match self.sink {
            OutputSink::Stdout => {
                print_commands(&result.statements)?;
                Ok("<stdout>".to_string())
            }
            OutputSink::File => {
                let target = self.config.cli_output_file();
                self.storage
                    .write_file(&target, result.render().as_bytes())
                    .await?;
                Ok(self.storage.resolve(&target))
            }
        }
    }
}

fn print_commands(commands: &[String]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for command in commands {
        writeln!(handle, "{}", command)?;
    }
    handle.flush()?;
    Ok(())
}
