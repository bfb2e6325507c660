/// Signed-token creation and verification.
///
/// Two token purposes exist, access and refresh, each signed with its own
/// secret. A compromise of one secret therefore cannot forge tokens of the
/// other purpose, and a token minted for one purpose never verifies under
/// the other.
///
/// Expiry lives inside the signed payload: a stolen token cannot be
/// extended by tampering with anything outside the signature.
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Claims, Subject};
use crate::utils::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPurpose {
    Access,
    Refresh,
}

/// Verification failure, one variant per distinguishable cause.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is structurally invalid")]
    Malformed,

    #[error("token signature is invalid")]
    BadSignature,

    #[error("token has expired")]
    Expired,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::BadSignature,
            _ => TokenError::Malformed,
        }
    }
}

struct PurposeKeys {
    enc: EncodingKey,
    dec: DecodingKey,
}

impl PurposeKeys {
    fn from_secret(secret: &[u8]) -> Self {
        Self {
            enc: EncodingKey::from_secret(secret),
            dec: DecodingKey::from_secret(secret),
        }
    }
}

pub struct TokenCodec {
    access: PurposeKeys,
    refresh: PurposeKeys,
}

impl TokenCodec {
    /// Build a codec from explicit secrets, one per purpose.
    pub fn new(access_secret: &[u8], refresh_secret: &[u8]) -> Self {
        Self {
            access: PurposeKeys::from_secret(access_secret),
            refresh: PurposeKeys::from_secret(refresh_secret),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.access_token_secret().as_bytes(),
            config.refresh_token_secret().as_bytes(),
        )
    }

    fn keys(&self, purpose: TokenPurpose) -> &PurposeKeys {
        match purpose {
            TokenPurpose::Access => &self.access,
            TokenPurpose::Refresh => &self.refresh,
        }
    }

    /// Sign a token for `subject` expiring `ttl` from now.
    ///
    /// A non-positive ttl produces an already-expired token; tests use this
    /// to exercise the expiry path with a real signature.
    pub fn mint(
        &self,
        subject: &Subject,
        purpose: TokenPurpose,
        ttl: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.as_ref().to_owned(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.keys(purpose).enc,
        )
    }

    /// Decode and validate a token for `purpose`, returning its subject.
    ///
    /// Fails closed: any structural, signature, or expiry failure maps to
    /// a `TokenError` and no subject is ever returned for a failed check.
    /// The subject comes back byte-exact, empty string included.
    pub fn verify(&self, token: &str, purpose: TokenPurpose) -> Result<Subject, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No leeway: a token is expired the second its exp passes.
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.keys(purpose).dec, &validation)?;
        Ok(Subject::new(data.claims.sub))
    }
}
