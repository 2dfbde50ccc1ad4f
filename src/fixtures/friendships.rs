//! Friendship write phase
//!
//! Seeds exactly four directional edges around the current user: two
//! accepted friendships, one incoming pending request, and one outgoing
//! pending request. The edge document id concatenates sender and receiver,
//! so each ordered pair upserts the same document on every run.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::{FriendshipStatus, SeedUser, FRIENDSHIPS_COLLECTION};
use crate::store::{DocumentStore, Fields};
use crate::types::Result;

/// Seed the fixed friendship graph between the owner and the first four bots
pub async fn seed_friendships(
    store: &dyn DocumentStore,
    owner_uid: &str,
    bots: &[SeedUser],
    now: DateTime<Utc>,
) -> Result<()> {
    for bot in &bots[..2] {
        write_edge(store, owner_uid, &bot.uid, FriendshipStatus::Accepted, now).await?;
    }

    // Incoming pending request
    write_edge(
        store,
        &bots[2].uid,
        owner_uid,
        FriendshipStatus::Pending,
        now - Duration::hours(3),
    )
    .await?;

    // Outgoing pending request
    write_edge(
        store,
        owner_uid,
        &bots[3].uid,
        FriendshipStatus::Pending,
        now - Duration::hours(2),
    )
    .await?;

    Ok(())
}

async fn write_edge(
    store: &dyn DocumentStore,
    sender_uid: &str,
    receiver_uid: &str,
    status: FriendshipStatus,
    created_at: DateTime<Utc>,
) -> Result<()> {
    let doc_id = format!("{sender_uid}_{receiver_uid}");
    let fields = Fields::new()
        .set("senderId", sender_uid)
        .set("receiverId", receiver_uid)
        .set("status", status.as_str())
        .set("createdAt", created_at);

    store.upsert(FRIENDSHIPS_COLLECTION, &doc_id, fields).await?;
    debug!(edge = %doc_id, status = status.as_str(), "Friendship upserted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_bots;
    use crate::store::memory::MemoryBackend;
    use crate::store::FieldValue;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_exactly_four_edges() {
        let backend = MemoryBackend::new();
        seed_friendships(&backend, "U1", &seed_bots(), now()).await.unwrap();

        let edges = backend.paths_with_prefix("friendships/");
        assert_eq!(edges.len(), 4);
        assert!(edges.contains(&"friendships/U1_seed_user_mila".to_string()));
        assert!(edges.contains(&"friendships/U1_seed_user_luka".to_string()));
        assert!(edges.contains(&"friendships/seed_user_ana_U1".to_string()));
        assert!(edges.contains(&"friendships/U1_seed_user_vuk".to_string()));
    }

    #[tokio::test]
    async fn test_statuses_and_directions() {
        let backend = MemoryBackend::new();
        seed_friendships(&backend, "U1", &seed_bots(), now()).await.unwrap();

        let accepted = backend.document("friendships/U1_seed_user_mila").unwrap();
        assert_eq!(accepted.get("status"), Some(&FieldValue::String("ACCEPTED".to_string())));
        assert_eq!(accepted.get("senderId"), Some(&FieldValue::String("U1".to_string())));

        let incoming = backend.document("friendships/seed_user_ana_U1").unwrap();
        assert_eq!(incoming.get("status"), Some(&FieldValue::String("PENDING".to_string())));
        assert_eq!(incoming.get("receiverId"), Some(&FieldValue::String("U1".to_string())));

        let outgoing = backend.document("friendships/U1_seed_user_vuk").unwrap();
        assert_eq!(outgoing.get("status"), Some(&FieldValue::String("PENDING".to_string())));
        assert_eq!(outgoing.get("senderId"), Some(&FieldValue::String("U1".to_string())));
    }

    #[tokio::test]
    async fn test_pending_edge_timestamps() {
        let backend = MemoryBackend::new();
        seed_friendships(&backend, "U1", &seed_bots(), now()).await.unwrap();

        let incoming = backend.document("friendships/seed_user_ana_U1").unwrap();
        assert_eq!(
            incoming.get("createdAt"),
            Some(&FieldValue::Timestamp(now() - Duration::hours(3)))
        );

        let outgoing = backend.document("friendships/U1_seed_user_vuk").unwrap();
        assert_eq!(
            outgoing.get("createdAt"),
            Some(&FieldValue::Timestamp(now() - Duration::hours(2)))
        );
    }

    #[tokio::test]
    async fn test_rerun_creates_no_new_edges() {
        let backend = MemoryBackend::new();
        seed_friendships(&backend, "U1", &seed_bots(), now()).await.unwrap();
        seed_friendships(&backend, "U1", &seed_bots(), now()).await.unwrap();

        assert_eq!(backend.paths_with_prefix("friendships/").len(), 4);
    }
}
