use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::{app_state::AppState, domain::ProfileResponse, errors::ProfileError};

pub async fn profile(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ProfileError> {
    let access_cookie_name = {
        let config = state.config.read().await;
        config.access_cookie_name().to_owned()
    };

    let token = jar
        .get(&access_cookie_name)
        .map(|c| c.value().to_owned())
        .unwrap_or_default();

    let subject = state
        .session_service
        .read()
        .await
        .verify_access(&token)
        .map_err(ProfileError::from)?;

    Ok((
        StatusCode::OK,
        Json(ProfileResponse {
            subject: subject.as_ref().to_owned(),
        }),
    ))
}
