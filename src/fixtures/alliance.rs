//! Alliance and chat write phase
//!
//! Upserts the single seeded alliance, points each member profile back at
//! it, and generates a deterministic chat transcript. Senders rotate
//! through the three members and lines through six fixed strings, with
//! timestamps stepping forward in 3-minute increments up to `now`.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::{SeedUser, ALLIANCES_COLLECTION, MESSAGES_SUBCOLLECTION, SEED_ALLIANCE_ID, USERS_COLLECTION};
use crate::store::{DocumentStore, Fields};
use crate::types::Result;

const CHAT_LINES: [&str; 6] = [
    "Ajmo tim, zavrsavamo mission veceras.",
    "Uradila sam daily zadatke, spremna za boss.",
    "Idemo, ja sam aktivirao opremu.",
    "Ko je za koordinisan attack za 10 min?",
    "Ja sam online i spreman.",
    "Pazite na PP, nemojte da ga potrosite prerano.",
];

/// Seed the alliance, member back-references, and chat history.
///
/// At least one message is always written; `message_count` only raises the
/// count. Message ids are sequence-based, so a rerun with a smaller count
/// updates the low sequence numbers and leaves the rest in place.
pub async fn seed_alliance(
    store: &dyn DocumentStore,
    owner_uid: &str,
    owner_name: &str,
    bots: &[SeedUser],
    message_count: u32,
    now: DateTime<Utc>,
) -> Result<()> {
    let member_ids = vec![
        owner_uid.to_string(),
        bots[0].uid.clone(),
        bots[1].uid.clone(),
    ];

    let fields = Fields::new()
        .set("id", SEED_ALLIANCE_ID)
        .set("name", "QA Savez")
        .set("leaderId", owner_uid)
        .set("memberIds", member_ids.clone())
        .set("missionActive", true)
        .set("missionBossHp", 300)
        .set("missionCurrentDamage", 87)
        .set("missionStartTime", now - Duration::hours(1))
        .set("createdAt", now - Duration::days(5));

    store.upsert(ALLIANCES_COLLECTION, SEED_ALLIANCE_ID, fields).await?;
    debug!(alliance = SEED_ALLIANCE_ID, members = member_ids.len(), "Alliance upserted");

    for uid in &member_ids {
        store
            .upsert(USERS_COLLECTION, uid, Fields::new().set("allianceId", SEED_ALLIANCE_ID))
            .await?;
    }

    let senders: [(&str, &str); 3] = [
        (owner_uid, owner_name),
        (bots[0].uid.as_str(), bots[0].username.as_str()),
        (bots[1].uid.as_str(), bots[1].username.as_str()),
    ];

    let total = message_count.max(1);
    for i in 0..total {
        let (sender_uid, sender_name) = senders[(i % 3) as usize];
        let text = CHAT_LINES[(i % 6) as usize];
        let timestamp = now - Duration::minutes((i64::from(message_count) - i64::from(i)) * 3);
        let doc_id = format!("seed_msg_{:03}", i + 1);

        let fields = Fields::new()
            .set("id", doc_id.as_str())
            .set("allianceId", SEED_ALLIANCE_ID)
            .set("senderId", sender_uid)
            .set("senderName", sender_name)
            .set("text", text)
            .set("timestamp", timestamp)
            .set("timestampClient", timestamp.timestamp_millis());

        store
            .upsert_nested(
                ALLIANCES_COLLECTION,
                SEED_ALLIANCE_ID,
                MESSAGES_SUBCOLLECTION,
                &doc_id,
                fields,
            )
            .await?;
    }
    debug!(count = total, "Alliance chat seeded");

    Ok(())
}
