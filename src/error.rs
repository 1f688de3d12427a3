use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Verification service error variants.
///
/// Domain outcomes (invalid or expired code) are not errors — they travel as
/// [`RedeemOutcome`](crate::domain::registry::RedeemOutcome) and serialize as
/// `status: "failure"` with HTTP 200, so callers can tell "your code didn't
/// work" apart from "the service is broken".
#[derive(Debug, thiserror::Error)]
pub enum VerifyServiceError {
    #[error("Roblox ID not provided.")]
    RobloxIdMissing,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for VerifyServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::RobloxIdMissing => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. 400s are expected client errors. Internal errors need
        // the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, "internal error");
        }
        let body = serde_json::json!({
            "status": "error",
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
