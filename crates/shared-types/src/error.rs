use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ConfigError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ConfigError => write!(f, "ConfigError"),
        }
    }
}

/// Structured error shared by the dashboard crates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    /// A path the router has nothing mapped to.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::ConfigError,
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::config(err.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_error_has_correct_kind() {
        let err = AppError::bad_request("unknown role: admin");
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(err.message, "unknown role: admin");
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = AppError::not_found("route /nowhere");
        assert_eq!(err.to_string(), "NotFound: route /nowhere");
    }

    #[test]
    fn toml_errors_become_config_errors() {
        let parse_err = toml::from_str::<toml::Value>("[dashboard").unwrap_err();
        let err: AppError = parse_err.into();
        assert_eq!(err.kind, AppErrorKind::ConfigError);
        assert!(!err.message.is_empty());
    }

    #[test]
    fn serializes_kind_as_variant_name() {
        let json = serde_json::to_string(&AppError::config("bad key")).unwrap();
        assert_eq!(json, r#"{"kind":"ConfigError","message":"bad key"}"#);
    }
}
