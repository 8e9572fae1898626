pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
pub use config::toml_config::MigrateConfig;

#[cfg(feature = "cli")]
pub use config::{CliArgs, Command};

pub use crate::core::{
    CliCommandPipeline, EtlEngine, ImportPipeline, MetadataRecord, OutputSink, SoqlPipeline,
    StatementForm,
};
pub use utils::error::{MigrateError, Result};
