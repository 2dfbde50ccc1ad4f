//! In-memory backend fake for tests
//!
//! Implements both capability traits over plain maps so fixture phases can
//! be exercised without a live backend. Documents are keyed by their full
//! path (`users/u1`, `alliances/a/messages/m1`) and merged on upsert, the
//! same way Firestore treats a masked PATCH. Account operations support
//! per-uid failure injection to drive the failed outcome bucket.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use super::{AccountProvider, AccountRecord, AccountSpec, DocumentStore, Fields};
use crate::types::{Result, SeedError};

#[derive(Debug, Default)]
pub struct MemoryBackend {
    docs: Mutex<BTreeMap<String, Fields>>,
    accounts: Mutex<BTreeMap<String, AccountSpec>>,
    fail_uids: Mutex<BTreeSet<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of one document by full path
    pub fn document(&self, path: &str) -> Option<Fields> {
        self.docs.lock().unwrap().get(path).cloned()
    }

    pub fn document_count(&self) -> usize {
        self.docs.lock().unwrap().len()
    }

    /// All document paths under a prefix, in key order
    pub fn paths_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.docs
            .lock()
            .unwrap()
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// Pre-register an account so the next lookup finds it
    pub fn preload_account(&self, spec: AccountSpec) {
        self.accounts.lock().unwrap().insert(spec.uid.clone(), spec);
    }

    pub fn account(&self, uid: &str) -> Option<AccountSpec> {
        self.accounts.lock().unwrap().get(uid).cloned()
    }

    /// Make create/update fail for this uid
    pub fn fail_account(&self, uid: &str) {
        self.fail_uids.lock().unwrap().insert(uid.to_string());
    }

    fn check_fail(&self, uid: &str) -> Result<()> {
        if self.fail_uids.lock().unwrap().contains(uid) {
            return Err(SeedError::Auth(format!("injected failure for {uid}")));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryBackend {
    async fn upsert(&self, collection: &str, doc_id: &str, fields: Fields) -> Result<()> {
        let path = format!("{collection}/{doc_id}");
        self.docs
            .lock()
            .unwrap()
            .entry(path)
            .or_default()
            .merge_from(&fields);
        Ok(())
    }

    async fn upsert_nested(
        &self,
        collection: &str,
        parent_id: &str,
        subcollection: &str,
        doc_id: &str,
        fields: Fields,
    ) -> Result<()> {
        let path = format!("{collection}/{parent_id}/{subcollection}/{doc_id}");
        self.docs
            .lock()
            .unwrap()
            .entry(path)
            .or_default()
            .merge_from(&fields);
        Ok(())
    }
}

#[async_trait]
impl AccountProvider for MemoryBackend {
    async fn lookup(&self, uid: &str) -> Result<Option<AccountRecord>> {
        Ok(self.accounts.lock().unwrap().get(uid).map(|spec| AccountRecord {
            uid: spec.uid.clone(),
            email: Some(spec.email.clone()),
            display_name: Some(spec.display_name.clone()),
        }))
    }

    async fn create(&self, account: &AccountSpec) -> Result<()> {
        self.check_fail(&account.uid)?;
        self.accounts
            .lock()
            .unwrap()
            .insert(account.uid.clone(), account.clone());
        Ok(())
    }

    async fn update(&self, account: &AccountSpec) -> Result<()> {
        self.check_fail(&account.uid)?;
        self.accounts
            .lock()
            .unwrap()
            .insert(account.uid.clone(), account.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FieldValue;

    #[tokio::test]
    async fn test_upsert_merges_existing_document() {
        let backend = MemoryBackend::new();
        backend
            .upsert("users", "u1", Fields::new().set("a", 1).set("b", "old"))
            .await
            .unwrap();
        backend
            .upsert("users", "u1", Fields::new().set("b", "new"))
            .await
            .unwrap();

        let doc = backend.document("users/u1").unwrap();
        assert_eq!(doc.get("a"), Some(&FieldValue::Integer(1)));
        assert_eq!(doc.get("b"), Some(&FieldValue::String("new".to_string())));
        assert_eq!(backend.document_count(), 1);
    }

    #[tokio::test]
    async fn test_nested_paths_do_not_collide() {
        let backend = MemoryBackend::new();
        backend
            .upsert("users", "u1", Fields::new().set("a", 1))
            .await
            .unwrap();
        backend
            .upsert_nested("users", "u1", "equipment", "e1", Fields::new().set("b", 2))
            .await
            .unwrap();

        assert_eq!(backend.document_count(), 2);
        assert!(backend.document("users/u1/equipment/e1").is_some());
    }

    #[tokio::test]
    async fn test_account_failure_injection() {
        let backend = MemoryBackend::new();
        backend.fail_account("u1");

        let spec = AccountSpec {
            uid: "u1".to_string(),
            email: "u1@example.com".to_string(),
            password: "pw123456".to_string(),
            display_name: "U1".to_string(),
            email_verified: true,
            disabled: false,
        };
        assert!(backend.create(&spec).await.is_err());
        assert!(backend.account("u1").is_none());
    }
}
