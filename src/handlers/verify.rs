use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::domain::registry::RedeemOutcome;
use crate::error::VerifyServiceError;
use crate::state::AppState;

/// Roblox sends ids as JSON numbers; other callers send strings. Accept both
/// and normalize to a string at the boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Str(String),
    Num(u64),
}

impl IdValue {
    fn into_string(self) -> String {
        match self {
            Self::Str(s) => s,
            Self::Num(n) => n.to_string(),
        }
    }
}

// ── GET / ─────────────────────────────────────────────────────────────────────

pub async fn home() -> &'static str {
    "Verification server is online! Your bot should be ready."
}

// ── POST /generate-code ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GenerateCodeRequest {
    #[serde(default, rename = "robloxId")]
    pub roblox_id: Option<IdValue>,
}

#[derive(Serialize)]
pub struct GenerateCodeResponse {
    pub status: &'static str,
    pub code: String,
}

pub async fn generate_code(
    State(state): State<AppState>,
    Json(body): Json<GenerateCodeRequest>,
) -> Result<Json<GenerateCodeResponse>, VerifyServiceError> {
    let roblox_id = body
        .roblox_id
        .map(IdValue::into_string)
        .ok_or(VerifyServiceError::RobloxIdMissing)?;

    let code = state.registry.issue(&roblox_id)?;
    Ok(Json(GenerateCodeResponse {
        status: "success",
        code,
    }))
}

// ── POST /submit-code ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SubmitCodeRequest {
    pub code: String,
    #[serde(rename = "discordId")]
    pub discord_id: String,
    #[serde(rename = "discordTag")]
    pub discord_tag: String,
}

#[derive(Serialize)]
pub struct SubmitCodeResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// A bad code is a domain outcome, not a transport error — both branches
/// answer HTTP 200 so the caller can tell them apart from a broken service.
pub async fn submit_code(
    State(state): State<AppState>,
    Json(body): Json<SubmitCodeRequest>,
) -> Json<SubmitCodeResponse> {
    let outcome = state
        .registry
        .redeem(&body.code, &body.discord_id, &body.discord_tag);

    let response = match outcome {
        RedeemOutcome::Linked(_) => SubmitCodeResponse {
            status: "success",
            message: "Verification successful.",
        },
        RedeemOutcome::InvalidCode => SubmitCodeResponse {
            status: "failure",
            message: "Invalid or expired code.",
        },
    };
    Json(response)
}

// ── GET /check-status/{robloxId} ──────────────────────────────────────────────

#[derive(Serialize)]
pub struct CheckStatusResponse {
    pub verified: bool,
    #[serde(rename = "discordId", skip_serializing_if = "Option::is_none")]
    pub discord_id: Option<String>,
}

pub async fn check_status(
    State(state): State<AppState>,
    Path(roblox_id): Path<String>,
) -> Json<CheckStatusResponse> {
    let discord_id = state.registry.lookup(&roblox_id);
    Json(CheckStatusResponse {
        verified: discord_id.is_some(),
        discord_id,
    })
}
