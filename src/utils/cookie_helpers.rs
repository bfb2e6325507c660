use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

// Both credential cookies are http-only + same-site-strict; max-age always
// matches the embedded token TTL. Path stays "/" for the refresh cookie as
// well, because the logout handler reads it.

pub fn access_cookie(name: &str, token: &str, ttl_secs: i64) -> Cookie<'static> {
    Cookie::build((name.to_string(), token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(true)
        .max_age(Duration::seconds(ttl_secs))
        .build()
}

pub fn refresh_cookie(name: &str, token: &str, ttl_secs: i64) -> Cookie<'static> {
    Cookie::build((name.to_string(), token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(true)
        .max_age(Duration::seconds(ttl_secs))
        .build()
}

pub fn clear_cookie(name: &str) -> Cookie<'static> {
    Cookie::build((name.to_owned(), String::new()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(true)
        .max_age(Duration::seconds(0))
        .build()
}
