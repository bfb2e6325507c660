use crate::helpers::{get_random_email, TestApp, TEST_PASSWORD};

#[tokio::test]
async fn verify_token_accepts_a_live_access_token() {
    let app = TestApp::new().await;
    app.signup(get_random_email(), TEST_PASSWORD.to_string())
        .await;
    let access = app.cookie("accessToken").expect("access cookie set");

    let response = app.verify_token(access).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn verify_token_rejects_a_refresh_token() {
    let app = TestApp::new().await;
    app.signup(get_random_email(), TEST_PASSWORD.to_string())
        .await;
    let refresh = app.cookie("refreshToken").expect("refresh cookie set");

    let response = app.verify_token(refresh).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn verify_token_rejects_garbage() {
    let app = TestApp::new().await;

    let response = app.verify_token("junk".to_string()).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn verify_token_requires_a_token() {
    let app = TestApp::new().await;

    let response = app.verify_token(String::new()).await;
    assert_eq!(response.status().as_u16(), 422);
}
