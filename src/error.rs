use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DataError: {0}")]
    Data(#[from] DataError),
    #[error("ServiceError: {0}")]
    Service(#[from] ServiceError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Input error: {0}")]
    Input(#[from] std::io::Error),
    #[error("Screen dismissed: {message}")]
    ScreenDismissed { message: String },
}

/// Failures reported by a [`CitiesService`](crate::core::services::traits::CitiesService).
///
/// The `Display` text is what view-models store as their user-facing error message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("City not found: {id}")]
    NotFound { id: String },
    #[error("{message}")]
    Unavailable { message: String },
}

/// The cities document could not be loaded. Fatal at startup.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to decode cities document: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Duplicate city id '{id}' in cities document")]
    DuplicateId { id: String },
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration serialize error: {message}")]
    ConfigSerializeError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String, hint: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(CliError::ScreenDismissed { .. }) => ErrorSeverity::Low,
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            // A broken cities document means the app cannot start at all
            AppError::Data(_) => ErrorSeverity::Critical,
            AppError::Service(service_error) => match service_error {
                ServiceError::NotFound { .. } => ErrorSeverity::Medium,
                ServiceError::Unavailable { .. } => ErrorSeverity::High,
            },
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Service(service_error) => service_error.to_string(),
            AppError::Cli(CliError::ScreenDismissed { message }) => message.clone(),
            AppError::Config(ConfigError::UnknownKey { key, hint }) => {
                format!("Unknown configuration key '{}' ({})", key, hint)
            }
            AppError::Config(ConfigError::InvalidValue {
                field,
                value,
                reason,
            }) => format!("Invalid value '{}' for '{}': {}", value, field, reason),
            _ => format!("{}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_messages() {
        let not_found = ServiceError::NotFound {
            id: "99".to_string(),
        };
        assert_eq!(not_found.to_string(), "City not found: 99");

        let unavailable = ServiceError::Unavailable {
            message: "Random error occurred".to_string(),
        };
        assert_eq!(unavailable.to_string(), "Random error occurred");
    }

    #[test]
    fn test_error_severity() {
        let data_error: AppError = DataError::DuplicateId {
            id: "1".to_string(),
        }
        .into();
        assert_eq!(data_error.severity(), ErrorSeverity::Critical);

        let service_error: AppError = ServiceError::Unavailable {
            message: "down".to_string(),
        }
        .into();
        assert_eq!(service_error.severity(), ErrorSeverity::High);
        assert_eq!(service_error.severity().emoji(), "❌");

        let dismissed: AppError = CliError::ScreenDismissed {
            message: "gone".to_string(),
        }
        .into();
        assert_eq!(dismissed.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_display_friendly_strips_layer_prefix() {
        let error: AppError = ServiceError::NotFound {
            id: "42".to_string(),
        }
        .into();
        assert_eq!(error.to_string(), "ServiceError: City not found: 42");
        assert_eq!(error.display_friendly(), "City not found: 42");
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: AppError = DataError::from(serde_error).into();
        assert!(matches!(error, AppError::Data(DataError::Decode(_))));
        assert!(error.to_string().contains("Failed to decode cities document"));
    }
}
