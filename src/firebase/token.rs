//! OAuth2 access tokens from a service-account JWT grant
//!
//! Signs an RS256 assertion with the service-account private key and
//! exchanges it at the key's token endpoint. The resulting bearer token is
//! shared by the Firestore and Identity Toolkit clients and cached until
//! shortly before expiry.

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use super::credentials::ServiceAccountKey;
use crate::types::{Result, SeedError};

const OAUTH_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
const JWT_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: u64 = 3600;

/// Renew this many seconds before the token actually expires
const EXPIRY_SLACK_SECS: u64 = 60;

#[derive(Debug, Serialize)]
struct GrantClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Fetches and caches OAuth2 access tokens for the service account
pub struct TokenProvider {
    key: ServiceAccountKey,
    http: reqwest::Client,
    cached: RwLock<Option<CachedToken>>,
}

impl TokenProvider {
    pub fn new(key: ServiceAccountKey) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("habitseed/0.1")
            .build()
            .unwrap_or_default();

        Self {
            key,
            http,
            cached: RwLock::new(None),
        }
    }

    /// Current bearer token, exchanging a fresh grant if the cache is
    /// empty or about to expire
    pub async fn bearer(&self) -> Result<String> {
        if let Some(token) = self.cached_token().await {
            return Ok(token);
        }

        let fresh = self.exchange().await?;
        let token = fresh.token.clone();
        *self.cached.write().await = Some(fresh);
        Ok(token)
    }

    async fn cached_token(&self) -> Option<String> {
        let cache = self.cached.read().await;
        cache.as_ref().and_then(|cached| {
            if cached.expires_at > Instant::now() {
                Some(cached.token.clone())
            } else {
                None
            }
        })
    }

    async fn exchange(&self) -> Result<CachedToken> {
        let assertion = self.sign_assertion()?;

        debug!(token_uri = %self.key.token_uri, "Exchanging service-account JWT grant");

        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| SeedError::Http(format!("Token exchange request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SeedError::Auth(format!(
                "Token endpoint returned {status}: {body}"
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| SeedError::Auth(format!("Invalid token response: {e}")))?;

        let lifetime = body.expires_in.saturating_sub(EXPIRY_SLACK_SECS);
        Ok(CachedToken {
            token: body.access_token,
            expires_at: Instant::now() + Duration::from_secs(lifetime),
        })
    }

    fn sign_assertion(&self) -> Result<String> {
        let iat = Utc::now().timestamp() as u64;
        let claims = GrantClaims {
            iss: &self.key.client_email,
            scope: OAUTH_SCOPE,
            aud: &self.key.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key.private_key_id.clone();

        let encoding_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())
            .map_err(|e| SeedError::Credentials(format!("Invalid RSA private key: {e}")))?;

        jsonwebtoken::encode(&header, &claims, &encoding_key)
            .map_err(|e| SeedError::Auth(format!("Failed to sign JWT grant: {e}")))
    }
}
