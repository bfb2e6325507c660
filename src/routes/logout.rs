use axum::{http::StatusCode, response::IntoResponse, Json};
use axum::extract::State;
use axum_extra::extract::CookieJar;

use crate::{
    app_state::AppState, domain::LogoutResponse, errors::LogoutError,
    utils::cookie_helpers::clear_cookie,
};

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, impl IntoResponse), LogoutError> {
    let refresh_cookie_name = {
        let config = state.config.read().await;
        config.refresh_cookie_name().to_owned()
    };

    // The refresh cookie names the session to revoke. A missing cookie
    // still clears client state; a present-but-invalid one is rejected.
    if let Some(cookie) = jar.get(&refresh_cookie_name) {
        let subject = state
            .session_service
            .read()
            .await
            .revoke_presented(cookie.value())
            .await
            .map_err(LogoutError::from)?;
        log::info!("session revoked for subject {subject}");
    }

    let jar = {
        let config = state.config.read().await;
        jar.add(clear_cookie(config.access_cookie_name()))
            .add(clear_cookie(config.refresh_cookie_name()))
    };

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(LogoutResponse {
                message: "Logged out successfully".to_string(),
            }),
        ),
    ))
}
