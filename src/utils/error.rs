use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplaceError {
    #[error("IO error on {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File {} is not valid UTF-8: {source}", .path.display())]
    EncodingError {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("TOML parsing error: {message}")]
    TomlParseError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate replacement key: {key}")]
    DuplicateKeyError { key: String },

    #[error("Could not write console output: {0}")]
    OutputError(#[source] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    FileSystem,
    Encoding,
    Configuration,
}

impl ReplaceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError { .. } | Self::OutputError(_) => ErrorCategory::FileSystem,
            Self::EncodingError { .. } => ErrorCategory::Encoding,
            Self::TomlParseError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::DuplicateKeyError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    format!("Target file not found: {}", path.display())
                }
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied for {}", path.display())
                }
                _ => format!("Could not access {}: {}", path.display(), source),
            },
            Self::EncodingError { path, .. } => {
                format!("{} does not contain valid UTF-8 text", path.display())
            }
            Self::TomlParseError { .. } => "The replacement table file is not valid TOML".to_string(),
            Self::MissingConfigError { field } => format!("Required setting '{}' is missing", field),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::DuplicateKeyError { key } => {
                format!("The replacement table lists the same text twice: {}", key)
            }
            Self::OutputError(_) => "Could not write the run transcript".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::FileSystem => "Check that the target path exists and is writable",
            ErrorCategory::Encoding => "Convert the target file to UTF-8 and run again",
            ErrorCategory::Configuration => "Fix the replacement table file and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReplaceError>;
