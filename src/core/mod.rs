pub mod commands;
pub mod etl;
pub mod parser;
pub mod schema;
pub mod soql;

pub use crate::app::pipelines::cli_pipeline::{CliCommandPipeline, OutputSink};
pub use crate::app::pipelines::import_pipeline::ImportPipeline;
pub use crate::app::pipelines::soql_pipeline::SoqlPipeline;
pub use crate::domain::model::{FieldAttributes, GeneratedArtifact, MetadataRecord, StatementForm};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
pub use etl::EtlEngine;
