use once_cell::sync::Lazy;
use regex::Regex;

static UPPER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());

/// True if pw is at least 8 chars with at least one uppercase and one digit.
pub fn is_valid_password(pw: &str) -> bool {
    pw.len() >= 8 && UPPER_RE.is_match(pw) && DIGIT_RE.is_match(pw)
}
