use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::{
    app_state::AppState, domain::RefreshResponse, errors::RefreshTokenError,
    utils::cookie_helpers::access_cookie,
};

pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, impl IntoResponse), RefreshTokenError> {
    let refresh_cookie_name = {
        let config = state.config.read().await;
        config.refresh_cookie_name().to_owned()
    };

    let presented = jar.get(&refresh_cookie_name).map(|c| c.value().to_owned());

    let access = state
        .session_service
        .read()
        .await
        .rotate(presented.as_deref())
        .await
        .map_err(RefreshTokenError::from)?;

    // Only the access cookie is replaced; the refresh credential stays as
    // issued until its own expiry or an explicit logout.
    let jar = {
        let config = state.config.read().await;
        jar.add(access_cookie(
            config.access_cookie_name(),
            &access,
            config.token_ttl_seconds(),
        ))
    };

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(RefreshResponse {
                message: "Token refreshed successfully".to_string(),
            }),
        ),
    ))
}
