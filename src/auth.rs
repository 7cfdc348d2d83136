//! App Store Connect API tokens (ES256-signed JWTs).

use anyhow::{Context, Result};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::model::Credentials;

pub const TOKEN_AUDIENCE: &str = "appstoreconnect-v1";

/// Tokens are valid for 20 minutes.
pub const TOKEN_LIFETIME_SECS: i64 = 1200;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    pub aud: String,
}

impl TokenClaims {
    pub fn issued_at(issuer_id: &str, now: i64) -> Self {
        Self {
            iss: issuer_id.to_string(),
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
            aud: TOKEN_AUDIENCE.to_string(),
        }
    }
}

pub fn issue_token(credentials: &Credentials, now: i64) -> Result<String> {
    let path = &credentials.private_key_path;
    let pem = std::fs::read(path).with_context(|| format!("read private key {}", path.display()))?;
    let key = EncodingKey::from_ec_pem(&pem)
        .with_context(|| format!("parse private key {}", path.display()))?;

    let mut header = Header::new(Algorithm::ES256);
    header.kid = Some(credentials.key_id.clone());
    header.typ = Some("JWT".to_string());

    let claims = TokenClaims::issued_at(&credentials.issuer_id, now);
    tracing::debug!(iat = claims.iat, exp = claims.exp, kid = %credentials.key_id, "signing api token");
    jsonwebtoken::encode(&header, &claims, &key).context("sign api token")
}

pub fn issue_token_now(credentials: &Credentials) -> Result<String> {
    let now = time::OffsetDateTime::now_utc().unix_timestamp();
    issue_token(credentials, now)
}

#[cfg(test)]
#[path = "tests/auth_tests.rs"]
mod tests;
