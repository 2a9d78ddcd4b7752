use std::fmt;
use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// One section-config field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    /// The offending value, or `None` when the field was missing.
    pub value: Option<String>,
    pub expected: Vec<&'static str>,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(
                f,
                "'{}' has invalid value '{}' (expected one of: {})",
                self.field,
                value,
                self.expected.join(", ")
            ),
            None => write!(
                f,
                "'{}' is missing (expected one of: {})",
                self.field,
                self.expected.join(", ")
            ),
        }
    }
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A palette, variant or template id outside its closed enumeration.
/// Raised while loading configuration, never mid-render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("invalid section configuration: {}", join_fields(.0))]
    InvalidFields(Vec<FieldError>),

    #[error("unknown color palette '{0}'")]
    UnknownPalette(String),

    #[error("unknown template id '{0}'")]
    UnknownTemplate(String),

    #[error("section configuration is not valid JSON: {0}")]
    Malformed(String),

    #[error("section configuration must be a JSON object")]
    NotAnObject,
}

/// Failure to read or parse the resume record.
#[derive(Debug, Error)]
pub enum ResumeLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed resume data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Configuration(e) => {
                tracing::debug!("Rejected configuration: {e}");
                (StatusCode::BAD_REQUEST, "CONFIGURATION_ERROR", e.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fields_message_lists_every_field() {
        let err = ConfigurationError::InvalidFields(vec![
            FieldError {
                field: "hero",
                value: Some("sparkles".into()),
                expected: vec!["spotlight"],
            },
            FieldError {
                field: "colorPalette",
                value: None,
                expected: vec!["rose"],
            },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("'hero' has invalid value 'sparkles'"));
        assert!(msg.contains("'colorPalette' is missing"));
    }

    #[test]
    fn test_configuration_error_maps_to_bad_request() {
        let response =
            AppError::from(ConfigurationError::UnknownPalette("pink".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
