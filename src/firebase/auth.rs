//! Identity Toolkit (Firebase Auth admin) REST client
//!
//! Implements account lookup, creation, and update keyed by uid. A lookup
//! that finds nothing is the normal "account does not exist yet" case and
//! maps to `Ok(None)`, not an error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::token::TokenProvider;
use crate::store::{AccountProvider, AccountRecord, AccountSpec};
use crate::types::{Result, SeedError};

const IDENTITY_TOOLKIT_HOST: &str = "https://identitytoolkit.googleapis.com/v1";

/// Firebase Auth admin client for one project
pub struct IdentityToolkitClient {
    project_id: String,
    token: Arc<TokenProvider>,
    http: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct LookupRequest<'a> {
    #[serde(rename = "localId")]
    local_id: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
struct LookupUser {
    #[serde(rename = "localId")]
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(rename = "displayName", default)]
    display_name: Option<String>,
}

#[derive(Debug, Serialize)]
struct AccountPayload<'a> {
    #[serde(rename = "localId")]
    local_id: &'a str,
    email: &'a str,
    password: &'a str,
    #[serde(rename = "displayName")]
    display_name: &'a str,
    #[serde(rename = "emailVerified")]
    email_verified: bool,
    disabled: bool,
}

impl<'a> From<&'a AccountSpec> for AccountPayload<'a> {
    fn from(spec: &'a AccountSpec) -> Self {
        Self {
            local_id: &spec.uid,
            email: &spec.email,
            password: &spec.password,
            display_name: &spec.display_name,
            email_verified: spec.email_verified,
            disabled: spec.disabled,
        }
    }
}

impl IdentityToolkitClient {
    pub fn new(project_id: &str, token: Arc<TokenProvider>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("habitseed/0.1")
            .build()
            .unwrap_or_default();

        Self {
            project_id: project_id.to_string(),
            token,
            http,
        }
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!(
            "{IDENTITY_TOOLKIT_HOST}/projects/{}/accounts{suffix}",
            self.project_id
        )
    }

    async fn post<T: Serialize>(&self, url: &str, payload: &T) -> Result<JsonValue> {
        let bearer = self.token.bearer().await?;

        let response = self
            .http
            .post(url)
            .bearer_auth(bearer)
            .json(payload)
            .send()
            .await
            .map_err(|e| SeedError::Http(format!("Identity Toolkit request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SeedError::Auth(format!("{url}: {status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| SeedError::Auth(format!("Invalid Identity Toolkit response: {e}")))
    }
}

#[async_trait]
impl AccountProvider for IdentityToolkitClient {
    async fn lookup(&self, uid: &str) -> Result<Option<AccountRecord>> {
        let request = LookupRequest { local_id: [uid] };
        let body = self.post(&self.endpoint(":lookup"), &request).await?;

        let parsed: LookupResponse = serde_json::from_value(body)
            .map_err(|e| SeedError::Auth(format!("Invalid lookup response: {e}")))?;

        debug!(uid = %uid, found = !parsed.users.is_empty(), "Account lookup");

        Ok(parsed.users.into_iter().next().map(|user| AccountRecord {
            uid: user.local_id,
            email: user.email,
            display_name: user.display_name,
        }))
    }

    async fn create(&self, account: &AccountSpec) -> Result<()> {
        let payload = AccountPayload::from(account);
        self.post(&self.endpoint(""), &payload).await?;
        debug!(uid = %account.uid, "Account created");
        Ok(())
    }

    async fn update(&self, account: &AccountSpec) -> Result<()> {
        let payload = AccountPayload::from(account);
        self.post(&self.endpoint(":update"), &payload).await?;
        debug!(uid = %account.uid, "Account updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_payload_serialization() {
        let spec = AccountSpec {
            uid: "seed_user_mila".to_string(),
            email: "mila.quest@example.com".to_string(),
            password: "SeedPass123!".to_string(),
            display_name: "MilaQuest".to_string(),
            email_verified: true,
            disabled: false,
        };

        let json = serde_json::to_value(AccountPayload::from(&spec)).unwrap();
        assert_eq!(json["localId"], "seed_user_mila");
        assert_eq!(json["displayName"], "MilaQuest");
        assert_eq!(json["emailVerified"], true);
        assert_eq!(json["disabled"], false);
    }

    #[test]
    fn test_lookup_response_without_users_is_not_found() {
        let parsed: LookupResponse = serde_json::from_str(r#"{"kind": "identitytoolkit#GetAccountInfoResponse"}"#).unwrap();
        assert!(parsed.users.is_empty());
    }

    #[test]
    fn test_lookup_response_with_user() {
        let parsed: LookupResponse = serde_json::from_str(
            r#"{"users": [{"localId": "u1", "email": "u1@seed.local", "displayName": "Nina"}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.users.len(), 1);
        assert_eq!(parsed.users[0].local_id, "u1");
        assert_eq!(parsed.users[0].display_name.as_deref(), Some("Nina"));
    }
}
