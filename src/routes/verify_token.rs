use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::{app_state::AppState, domain::VerifyTokenRequestBody, errors::VerifyTokenError};

pub async fn verify_token(
    State(state): State<AppState>,
    Json(request): Json<VerifyTokenRequestBody>,
) -> Result<impl IntoResponse, VerifyTokenError> {
    state
        .session_service
        .read()
        .await
        .verify_access(&request.token)
        .map_err(VerifyTokenError::from)?;

    Ok(StatusCode::OK)
}
