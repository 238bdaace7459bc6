use crate::error::ApiError;
use axum::body::Bytes;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

pub const GENERATE_PATH: &str = "/api/generate";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReply {
    pub message: &'static str,
    pub data_received: Value,
}

pub fn app() -> Router {
    Router::new().route(GENERATE_PATH, post(generate))
}

/// Echo the received project back. The body is read raw so a malformed
/// payload gets the JSON error reply instead of axum's rejection.
async fn generate(body: Bytes) -> Result<Json<GenerateReply>, ApiError> {
    let received: Value = serde_json::from_slice(&body).map_err(|err| {
        log::error!("error in {GENERATE_PATH}: {err}");
        ApiError::processing(err)
    })?;
    log::info!(
        "JSON received:\n{}",
        serde_json::to_string_pretty(&received).unwrap_or_else(|_| received.to_string())
    );
    Ok(Json(GenerateReply {
        message: "JSON procesado con éxito en el backend.",
        data_received: received,
    }))
}
