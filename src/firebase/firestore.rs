//! Firestore REST client
//!
//! Writes documents through the `projects.databases.documents` REST
//! surface. Every write is a PATCH with an `updateMask` listing exactly
//! the supplied fields, which gives merge-upsert semantics: the document
//! is created if absent, and only the masked fields are touched if it
//! already exists.

use async_trait::async_trait;
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::token::TokenProvider;
use crate::store::{DocumentStore, FieldValue, Fields};
use crate::types::{Result, SeedError};

const FIRESTORE_HOST: &str = "https://firestore.googleapis.com/v1";

/// Firestore documents client for one project
pub struct FirestoreClient {
    project_id: String,
    token: Arc<TokenProvider>,
    http: reqwest::Client,
}

impl FirestoreClient {
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

    fn document_url(&self, path: &str) -> String {
        format!(
            "{FIRESTORE_HOST}/projects/{}/databases/(default)/documents/{path}",
            self.project_id
        )
    }

    async fn patch(&self, path: &str, fields: Fields) -> Result<()> {
        let mask: Vec<(&str, &str)> = fields
            .keys()
            .map(|key| ("updateMask.fieldPaths", key.as_str()))
            .collect();
        let body = json!({ "fields": encode_fields(&fields) });

        let bearer = self.token.bearer().await?;

        debug!(path = %path, fields = fields.len(), "Upserting Firestore document");

        let response = self
            .http
            .patch(self.document_url(path))
            .query(&mask)
            .bearer_auth(bearer)
            .json(&body)
            .send()
            .await
            .map_err(|e| SeedError::Http(format!("Firestore request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SeedError::Firestore(format!("{path}: {status}: {body}")));
        }

        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn upsert(&self, collection: &str, doc_id: &str, fields: Fields) -> Result<()> {
        self.patch(&format!("{collection}/{doc_id}"), fields).await
    }

    async fn upsert_nested(
        &self,
        collection: &str,
        parent_id: &str,
        subcollection: &str,
        doc_id: &str,
        fields: Fields,
    ) -> Result<()> {
        self.patch(
            &format!("{collection}/{parent_id}/{subcollection}/{doc_id}"),
            fields,
        )
        .await
    }
}

/// Encode a field map into the Firestore REST `fields` object
fn encode_fields(fields: &Fields) -> JsonValue {
    let mut map = serde_json::Map::new();
    for (key, value) in fields.iter() {
        map.insert(key.clone(), encode_value(value));
    }
    JsonValue::Object(map)
}

/// Encode one value into Firestore's typed-value wrapper
fn encode_value(value: &FieldValue) -> JsonValue {
    match value {
        FieldValue::Null => json!({ "nullValue": null }),
        FieldValue::Bool(b) => json!({ "booleanValue": b }),
        // Firestore integers are 64-bit and travel as strings
        FieldValue::Integer(i) => json!({ "integerValue": i.to_string() }),
        FieldValue::String(s) => json!({ "stringValue": s }),
        FieldValue::Timestamp(t) => {
            json!({ "timestampValue": t.to_rfc3339_opts(chrono::SecondsFormat::Micros, true) })
        }
        FieldValue::Array(items) => {
            let values: Vec<JsonValue> = items.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
    }
}
