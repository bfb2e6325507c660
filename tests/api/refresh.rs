use crate::helpers::{get_random_email, TestApp, TEST_PASSWORD};

#[tokio::test]
async fn refresh_with_active_session_returns_new_access_cookie() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.signup(email, TEST_PASSWORD.to_string()).await;

    let before = app.cookie("accessToken").expect("access cookie set");

    let response = app.refresh().await;
    assert_eq!(response.status().as_u16(), 200);

    let after = app.cookie("accessToken").expect("access cookie refreshed");
    assert_ne!(before, after);

    // The refreshed access token authenticates requests.
    let profile = app.profile().await;
    assert_eq!(profile.status().as_u16(), 200);
}

#[tokio::test]
async fn refresh_without_session_cookie_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.refresh().await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn refresh_with_garbage_token_is_unauthorized() {
    let app = TestApp::new().await;
    app.set_cookie("refreshToken", "garbage.token.value");

    let response = app.refresh().await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn superseded_refresh_token_is_rejected() {
    let app = TestApp::new().await;
    let email = get_random_email();

    app.signup(email.clone(), TEST_PASSWORD.to_string()).await;
    let first_refresh = app.cookie("refreshToken").expect("refresh cookie set");

    // Logging in again issues a new session for the same subject; the
    // earlier refresh token no longer matches the stored record.
    app.login(email, TEST_PASSWORD.to_string()).await;

    app.set_cookie("refreshToken", &first_refresh);
    let response = app.refresh().await;
    assert_eq!(response.status().as_u16(), 401);
}
