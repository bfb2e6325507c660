use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use reqwest::header::SET_COOKIE;
use reqwest::{Client, Response};
use tokio::net::TcpListener;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use storefront_auth::app_router;
use storefront_auth::app_state::AppState;
use storefront_auth::domain::{LoginRequestBody, SignupRequestBody, VerifyTokenRequestBody};
use storefront_auth::services::data_stores::hashmap_refresh_store::HashmapRefreshStore;
use storefront_auth::services::data_stores::hashmap_user_store::HashmapUserStore;
use storefront_auth::services::SessionService;
use storefront_auth::utils::Config;

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    // The credential cookies are Secure, which reqwest's jar will not
    // replay over plain http, so the tests track them by hand.
    cookies: Mutex<HashMap<String, String>>,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Arc::new(RwLock::new(
            Config::new(
                "api-test-access-secret-0123456789abcdef".to_string(),
                "api-test-refresh-secret-fedcba98765432".to_string(),
                900,
                604800,
                "127.0.0.1:6379".to_string(),
            )
            .expect("failed to build test config"),
        ));

        let session_service = Arc::new(RwLock::new(
            SessionService::new(config.clone(), Box::new(HashmapRefreshStore::new())).await,
        ));
        let user_store = Arc::new(RwLock::new(HashmapUserStore::new()));
        let app_state = AppState::new(user_store, session_service, config);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");

        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state));

        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
            cookies: Mutex::new(HashMap::new()),
        }
    }

    fn absorb_cookies(&self, response: &Response) {
        let mut store = self.cookies.lock().unwrap();
        for value in response.headers().get_all(SET_COOKIE) {
            let Ok(raw) = value.to_str() else { continue };
            let Some(pair) = raw.split(';').next() else { continue };
            let Some((name, value)) = pair.split_once('=') else { continue };
            if value.is_empty() {
                store.remove(name);
            } else {
                store.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn cookie_header(&self) -> String {
        self.cookies
            .lock()
            .unwrap()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.lock().unwrap().get(name).cloned()
    }

    pub fn set_cookie(&self, name: &str, value: &str) {
        self.cookies
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }

    pub async fn signup(&self, email: String, password: String) -> Response {
        let body = SignupRequestBody { email, password };

        let response = self
            .http_client
            .post(format!("{}/signup", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute signup request.");
        self.absorb_cookies(&response);
        response
    }

    pub async fn login(&self, email: String, password: String) -> Response {
        let body = LoginRequestBody { email, password };

        let response = self
            .http_client
            .post(format!("{}/login", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute login request.");
        self.absorb_cookies(&response);
        response
    }

    pub async fn refresh(&self) -> Response {
        let response = self
            .http_client
            .post(format!("{}/refresh-token", &self.address))
            .header("Cookie", self.cookie_header())
            .send()
            .await
            .expect("Failed to execute refresh request.");
        self.absorb_cookies(&response);
        response
    }

    pub async fn logout(&self) -> Response {
        let response = self
            .http_client
            .post(format!("{}/logout", &self.address))
            .header("Cookie", self.cookie_header())
            .send()
            .await
            .expect("Failed to execute logout request.");
        self.absorb_cookies(&response);
        response
    }

    pub async fn profile(&self) -> Response {
        self.http_client
            .get(format!("{}/profile", &self.address))
            .header("Cookie", self.cookie_header())
            .send()
            .await
            .expect("Failed to execute profile request.")
    }

    pub async fn verify_token(&self, token: String) -> Response {
        let body = VerifyTokenRequestBody { token };

        self.http_client
            .post(format!("{}/verify-token", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute verify token request.")
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

pub const TEST_PASSWORD: &str = "Sturdy-Passw0rd";
