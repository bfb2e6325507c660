use crate::helpers::{get_random_email, TestApp, TEST_PASSWORD};

#[tokio::test]
async fn logout_revokes_the_session() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.signup(email, TEST_PASSWORD.to_string()).await;
    let refresh = app.cookie("refreshToken").expect("refresh cookie set");

    let response = app.logout().await;
    assert_eq!(response.status().as_u16(), 200);

    // Both cookies are cleared client-side...
    assert!(app.cookie("accessToken").is_none());
    assert!(app.cookie("refreshToken").is_none());

    // ...and the old refresh token is dead server-side.
    app.set_cookie("refreshToken", &refresh);
    let rotate = app.refresh().await;
    assert_eq!(rotate.status().as_u16(), 401);
}

#[tokio::test]
async fn logout_without_session_still_succeeds() {
    let app = TestApp::new().await;

    let response = app.logout().await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn repeated_logout_is_harmless() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.signup(email, TEST_PASSWORD.to_string()).await;

    let first = app.logout().await;
    assert_eq!(first.status().as_u16(), 200);

    let second = app.logout().await;
    assert_eq!(second.status().as_u16(), 200);
}

#[tokio::test]
async fn logout_with_garbage_refresh_cookie_is_unauthorized() {
    let app = TestApp::new().await;
    app.set_cookie("refreshToken", "garbage.token.value");

    let response = app.logout().await;
    assert_eq!(response.status().as_u16(), 401);
}
