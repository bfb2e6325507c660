use crate::helpers::{get_random_email, TestApp, TEST_PASSWORD};

#[tokio::test]
async fn signup_returns_201_and_sets_session_cookies() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app.signup(email, TEST_PASSWORD.to_string()).await;
    assert_eq!(response.status().as_u16(), 201);

    // A fresh account is logged in immediately.
    assert!(app.cookie("accessToken").is_some());
    assert!(app.cookie("refreshToken").is_some());
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let first = app.signup(email.clone(), TEST_PASSWORD.to_string()).await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app.signup(email, TEST_PASSWORD.to_string()).await;
    assert_eq!(second.status().as_u16(), 409);
}

#[tokio::test]
async fn signup_rejects_invalid_email() {
    let app = TestApp::new().await;

    let response = app
        .signup("not-an-email".to_string(), TEST_PASSWORD.to_string())
        .await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn signup_rejects_weak_password() {
    let app = TestApp::new().await;

    let response = app.signup(get_random_email(), "weak".to_string()).await;
    assert_eq!(response.status().as_u16(), 400);
}
