use thiserror::Error;

#[derive(Error, Debug)]
pub enum QsmError {
    #[error("incorrect number of echo times: expected 1 or 2, got {count}")]
    InvalidEchoTimes { count: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Reconstruction backend failed: {message}")]
    BackendError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning only, run still counts as successful
    Low,
    /// Transient, retrying may help
    Medium,
    /// The run failed, inputs need fixing
    High,
    /// Environment or system problem
    Critical,
}

impl QsmError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            QsmError::InvalidEchoTimes { .. } => ErrorSeverity::High,
            QsmError::BackendError { .. } => ErrorSeverity::High,
            QsmError::IoError(_) => ErrorSeverity::Critical,
            QsmError::TomlError(_)
            | QsmError::SerializationError(_)
            | QsmError::ConfigError { .. }
            | QsmError::InvalidConfigValueError { .. }
            | QsmError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            QsmError::InvalidEchoTimes { count } => format!(
                "Supply one echo time for single-echo QSM or two for dual-echo QSM (got {})",
                count
            ),
            QsmError::IoError(_) => {
                "Check that the input directory, mask file and output directory are accessible"
                    .to_string()
            }
            QsmError::TomlError(_) => {
                "Check the configuration file for TOML syntax errors".to_string()
            }
            QsmError::SerializationError(_) => {
                "Check that the run manifest destination is writable".to_string()
            }
            QsmError::ConfigError { .. }
            | QsmError::InvalidConfigValueError { .. }
            | QsmError::MissingConfigError { .. } => {
                "Review the configuration values and try again".to_string()
            }
            QsmError::BackendError { .. } => {
                "Check the MATLAB installation and the backend log output".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QsmError::InvalidEchoTimes { count } => format!(
                "QSM reconstruction requires 1 or 2 echo times, but {} were given",
                count
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QsmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_echo_times_message() {
        let err = QsmError::InvalidEchoTimes { count: 3 };
        assert_eq!(
            err.to_string(),
            "incorrect number of echo times: expected 1 or 2, got 3"
        );
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_config_error_severity() {
        let err = QsmError::MissingConfigError {
            field: "mask_file".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("mask_file"));
    }
}
