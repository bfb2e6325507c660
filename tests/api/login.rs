use crate::helpers::{get_random_email, TestApp, TEST_PASSWORD};

#[tokio::test]
async fn login_after_signup_succeeds_and_sets_cookies() {
    let app = TestApp::new().await;
    let email = get_random_email();

    app.signup(email.clone(), TEST_PASSWORD.to_string()).await;

    let response = app.login(email, TEST_PASSWORD.to_string()).await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(app.cookie("accessToken").is_some());
    assert!(app.cookie("refreshToken").is_some());
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    let email = get_random_email();

    app.signup(email.clone(), TEST_PASSWORD.to_string()).await;

    let response = app.login(email, "Wrong-Passw0rd".to_string()).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn login_with_unknown_user_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .login(get_random_email(), TEST_PASSWORD.to_string())
        .await;
    assert_eq!(response.status().as_u16(), 401);
}
