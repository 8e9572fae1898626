use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Malformed input: {message}")]
    MalformedInputError { message: String },

    #[error("Unexpected shape for '{object}': {message}")]
    ShapeError { object: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Shape,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MigrateError {
    pub fn header_not_found(marker: &str) -> Self {
        MigrateError::MalformedInputError {
            message: format!("header row not found (no line contains \"{}\")", marker),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MigrateError::IoError(_) => ErrorCategory::Io,
            MigrateError::JsonError(_)
            | MigrateError::CsvError(_)
            | MigrateError::MalformedInputError { .. } => ErrorCategory::Parse,
            MigrateError::ShapeError { .. } => ErrorCategory::Shape,
            MigrateError::TomlError(_)
            | MigrateError::ConfigError { .. }
            | MigrateError::InvalidConfigValueError { .. }
            | MigrateError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 單一物件格式錯誤只會被略過
            ErrorCategory::Shape => ErrorSeverity::Low,
            ErrorCategory::Parse => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MigrateError::IoError(e) => format!("Could not read or write a file: {}", e),
            MigrateError::JsonError(e) => format!("The metadata file is not valid JSON: {}", e),
            MigrateError::CsvError(e) => format!("The CSV file could not be parsed: {}", e),
            MigrateError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            MigrateError::MalformedInputError { message } => {
                format!("The metadata export is malformed: {}", message)
            }
            MigrateError::ShapeError { object, message } => {
                format!("Skipped '{}': {}", object, message)
            }
            MigrateError::ConfigError { message } => format!("Configuration problem: {}", message),
            MigrateError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            MigrateError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MigrateError::IoError(_) => "Check that the input path exists and the output directory is writable",
            MigrateError::JsonError(_) => {
                "Regenerate the JSON with `import-metadata` or fix its structure by hand"
            }
            MigrateError::CsvError(_) => "Check the delimiter setting and quoting of the export",
            MigrateError::MalformedInputError { .. } => {
                "Make sure the export contains a header row with a \"Field API Name\" column"
            }
            MigrateError::ShapeError { .. } => {
                "Each object must map to a list of fields or to an object with a \"fields\" list"
            }
            MigrateError::TomlError(_)
            | MigrateError::ConfigError { .. }
            | MigrateError::InvalidConfigValueError { .. }
            | MigrateError::MissingConfigError { .. } => "Review the values in ssm.toml or the command-line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, MigrateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_not_found_is_parse_error() {
        let err = MigrateError::header_not_found("Field API Name");
        assert_eq!(err.category(), ErrorCategory::Parse);
        assert!(err.to_string().contains("header row not found"));
    }

    #[test]
    fn test_shape_error_is_low_severity() {
        let err = MigrateError::ShapeError {
            object: "Account".to_string(),
            message: "not a list".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains("Account"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: MigrateError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
