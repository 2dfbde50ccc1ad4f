//! Backend capability interfaces
//!
//! The fixture phases only need two narrow capabilities: merge-upserting
//! documents into a store with nested sub-collections, and
//! get/create/update of authentication accounts keyed by the same uid
//! space. Both are expressed as traits so the phases can run against the
//! live Firestore/Identity Toolkit clients or an in-memory fake in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::types::Result;

#[cfg(test)]
pub mod memory;

/// A single typed field value, mirroring the Firestore value model
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    String(String),
    Timestamp(DateTime<Utc>),
    Array(Vec<FieldValue>),
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value as i64)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::Array(values.into_iter().map(FieldValue::String).collect())
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::Array(values.into_iter().map(FieldValue::from).collect())
    }
}

/// None maps to an explicit null field, matching the original payloads
impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => FieldValue::Null,
        }
    }
}

/// An ordered field map for one document write
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(BTreeMap<String, FieldValue>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, builder style
    pub fn set(mut self, key: &str, value: impl Into<FieldValue>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge another field map into this one, overwriting shared keys and
    /// leaving the rest untouched (merge-upsert semantics)
    pub fn merge_from(&mut self, other: &Fields) {
        for (key, value) in other.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }
}

/// Document store with collection/document merge-upserts and one level of
/// nested sub-collections
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Merge-upsert `{collection}/{doc_id}`
    async fn upsert(&self, collection: &str, doc_id: &str, fields: Fields) -> Result<()>;

    /// Merge-upsert `{collection}/{parent_id}/{subcollection}/{doc_id}`
    async fn upsert_nested(
        &self,
        collection: &str,
        parent_id: &str,
        subcollection: &str,
        doc_id: &str,
        fields: Fields,
    ) -> Result<()>;
}

/// Account fields written to the authentication provider
#[derive(Debug, Clone)]
pub struct AccountSpec {
    pub uid: String,
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub email_verified: bool,
    pub disabled: bool,
}

/// Existing account as returned by a lookup
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

/// Authentication provider keyed by the same uid space as the document store
#[async_trait]
pub trait AccountProvider: Send + Sync {
    /// Fetch an account by uid; `None` is the normal not-found case
    async fn lookup(&self, uid: &str) -> Result<Option<AccountRecord>>;

    /// Create an account that does not exist yet
    async fn create(&self, account: &AccountSpec) -> Result<()>;

    /// Update an existing account in place
    async fn update(&self, account: &AccountSpec) -> Result<()>;
}
