use crate::core::parser::{ParserOptions, DEFAULT_HEADER_MARKER};
use crate::core::ConfigProvider;
use crate::domain::model::StatementForm;
use crate::utils::error::{MigrateError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "ssm.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrateConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
    pub cli: CliToolConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub header_marker: String,
    pub delimiter: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            header_marker: DEFAULT_HEADER_MARKER.to_string(),
            delimiter: ",".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub base_dir: String,
    pub soql_dir: String,
    pub cli_dir: String,
    pub ddl_file: String,
    pub select_file: String,
    pub cli_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_dir: "./csv_files".to_string(),
            soql_dir: "soql_output".to_string(),
            cli_dir: "cli_output".to_string(),
            ddl_file: "create_queries.soql".to_string(),
            select_file: "select_queries.soql".to_string(),
            cli_file: "cli_commands.soql".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliToolConfig {
    pub executable: String,
}

impl Default for CliToolConfig {
    fn default() -> Self {
        Self {
            executable: crate::core::commands::DEFAULT_EXECUTABLE.to_string(),
        }
    }
}

impl MigrateConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MigrateError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 明確指定的檔案必須存在；未指定時只在工作目錄有 ssm.toml 才載入
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                Self::from_file(path)
            }
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                tracing::debug!("Loading configuration from {}", DEFAULT_CONFIG_FILE);
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MigrateError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            header_marker: self.parser.header_marker.clone(),
            delimiter: self.delimiter(),
        }
    }

    pub fn set_delimiter(&mut self, delimiter: char) {
        self.parser.delimiter = delimiter.to_string();
    }
}

impl ConfigProvider for MigrateConfig {
    fn header_marker(&self) -> &str {
        &self.parser.header_marker
    }

    fn delimiter(&self) -> u8 {
        // validate() 保證是單一 byte
        self.parser.delimiter.as_bytes().first().copied().unwrap_or(b',')
    }

    fn output_path(&self) -> &str {
        &self.output.base_dir
    }

    fn soql_output_file(&self, form: StatementForm) -> String {
        let file = match form {
            StatementForm::Ddl => &self.output.ddl_file,
            StatementForm::Select => &self.output.select_file,
        };
        Path::new(&self.output.base_dir)
            .join(&self.output.soql_dir)
            .join(file)
            .to_string_lossy()
            .into_owned()
    }

    fn cli_output_file(&self) -> String {
        Path::new(&self.output.base_dir)
            .join(&self.output.cli_dir)
            .join(&self.output.cli_file)
            .to_string_lossy()
            .into_owned()
    }

    fn cli_executable(&self) -> &str {
        &self.cli.executable
    }
}

impl Validate for MigrateConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("parser.header_marker", &self.parser.header_marker)?;
        validation::validate_delimiter("parser.delimiter", &self.parser.delimiter)?;
        validation::validate_path("output.base_dir", &self.output.base_dir)?;
        validation::validate_path("output.soql_dir", &self.output.soql_dir)?;
        validation::validate_path("output.cli_dir", &self.output.cli_dir)?;
        for (field, file) in [
            ("output.ddl_file", &self.output.ddl_file),
            ("output.select_file", &self.output.select_file),
            ("output.cli_file", &self.output.cli_file),
        ] {
            validation::validate_path(field, file)?;
            validation::validate_file_extension(field, file, &["soql", "sql", "txt", "sh"])?;
        }
        validation::validate_non_empty_string("cli.executable", &self.cli.executable)?;
        Ok(())
    }
}
