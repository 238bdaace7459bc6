use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::net::AddrParseError;
use thiserror::Error;

/// API error response: `{ "message": ..., "error": ... }` with `status`.
#[derive(Debug, Error)]
#[error("{message}: {error}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
    pub error: String,
}

impl ApiError {
    /// The request body could not be processed.
    pub fn processing(error: impl ToString) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Error al procesar el JSON en el servidor",
            error: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "message": self.message,
            "error": self.error,
        });
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}
