use crate::app_state::AppState;
use crate::domain::{Email, Password, SignupRequestBody, SignupResponse, Subject};
use crate::errors::SignupError;
use crate::services::AuthService;
use crate::utils::cookie_helpers::{access_cookie, refresh_cookie};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<SignupRequestBody>,
) -> Result<(CookieJar, impl IntoResponse), SignupError> {
    let email = Email::parse(request.email).or(Err(SignupError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(SignupError::InvalidPassword))?;

    AuthService::signup(state.clone(), email.clone(), password).await?;

    // A fresh account is authenticated right away, same as a login.
    let issued = state
        .session_service
        .read()
        .await
        .issue_session(&Subject::new(email.as_ref()))
        .await
        .map_err(SignupError::from)?;

    let jar = {
        let config = state.config.read().await;
        jar.add(access_cookie(
            config.access_cookie_name(),
            &issued.access_token,
            config.token_ttl_seconds(),
        ))
        .add(refresh_cookie(
            config.refresh_cookie_name(),
            &issued.refresh_token,
            config.refresh_token_ttl_seconds(),
        ))
    };

    Ok((
        jar,
        (
            StatusCode::CREATED,
            Json(SignupResponse {
                message: "User created successfully!".to_string(),
            }),
        ),
    ))
}
