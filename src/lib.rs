use app_state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use axum_server::bind;
use routes::{login, logout, profile, refresh_token, signup, verify_token};
use std::{error::Error, future::Future, pin::Pin};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .route("/signup", post(signup::signup))
        .route("/login", post(login::login))
        .route("/logout", post(logout::logout))
        .route("/refresh-token", post(refresh_token::refresh_token))
        .route("/verify-token", post(verify_token::verify_token))
        .route("/profile", get(profile::profile))
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        println!("listening on {}", &self.address);
        self.http_future.await
    }
}
