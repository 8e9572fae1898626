pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use args::{CliArgs, Command};

#[cfg(feature = "cli")]
mod args {
    use super::toml_config::MigrateConfig;
    use crate::domain::model::StatementForm;
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "ssm")]
    #[command(version)]
    #[command(about = "Migrate Salesforce schema metadata between CSV, JSON, SOQL and sfdx commands")]
    pub struct CliArgs {
        /// Path to a TOML configuration file (defaults to ./ssm.toml when present)
        #[arg(short, long, global = true)]
        pub config: Option<String>,

        /// Override the output base directory
        #[arg(long, global = true)]
        pub output_dir: Option<String>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON")]
        pub log_json: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Import metadata from a CSV export into JSON
        ImportMetadata {
            /// CSV file with Salesforce metadata
            csv_file: String,

            /// Where to write the JSON (defaults to <csvFile>.json)
            #[arg(short, long)]
            output: Option<String>,

            /// Treat the export as tab-delimited
            #[arg(long, conflicts_with = "delimiter")]
            tab: bool,

            /// Cell delimiter, a single character
            #[arg(long)]
            delimiter: Option<char>,

            /// Text that identifies the header row
            #[arg(long)]
            header_marker: Option<String>,
        },

        /// Generate SOQL statements from metadata JSON
        GenerateSoql {
            /// JSON file with parsed metadata
            json_file: String,

            #[arg(long, value_enum, default_value_t = StatementForm::Ddl)]
            form: StatementForm,
        },

        /// Generate Salesforce CLI commands from metadata JSON
        GenerateCli {
            /// JSON file with parsed metadata
            json_file: String,

            /// Print commands to stdout instead of writing a file
            #[arg(long)]
            stdout: bool,

            /// CLI executable placed in front of every command
            #[arg(long)]
            executable: Option<String>,
        },
    }

    impl CliArgs {
        /// 命令列參數覆蓋設定檔
        pub fn apply_overrides(&self, config: &mut MigrateConfig) {
            if let Some(dir) = &self.output_dir {
                config.output.base_dir = dir.clone();
            }

            match &self.command {
                Command::ImportMetadata {
                    tab,
                    delimiter,
                    header_marker,
                    ..
                } => {
                    if *tab {
                        config.set_delimiter('\t');
                    } else if let Some(delimiter) = delimiter {
                        config.set_delimiter(*delimiter);
                    }
                    if let Some(marker) = header_marker {
                        config.parser.header_marker = marker.clone();
                    }
                }
                Command::GenerateCli {
                    executable: Some(executable),
                    ..
                } => {
                    config.cli.executable = executable.clone();
                }
                _ => {}
            }
        }
    }

}
