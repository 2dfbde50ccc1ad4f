//! Equipment write phase

use chrono::{DateTime, Utc};
use tracing::debug;

use super::{EQUIPMENT_SUBCOLLECTION, USERS_COLLECTION};
use crate::store::{DocumentStore, Fields};
use crate::types::Result;

/// Upsert the two fixed equipment items under the owner's profile, with a
/// fresh update timestamp on every run
pub async fn seed_equipment(
    store: &dyn DocumentStore,
    owner_uid: &str,
    now: DateTime<Utc>,
) -> Result<()> {
    let items: [(&str, Fields); 2] = [
        (
            "seed_eq_pp_boost",
            Fields::new()
                .set("name", "Potion PP +10")
                .set("type", "potion")
                .set("description", "Dodaje 10 PP za battle test.")
                .set("icon", "potion_blue")
                .set("quantity", 2)
                .set("active", true)
                .set("battlesRemaining", 0)
                .set("bonus", 10)
                .set("effect", "BOOST_PP")
                .set("updatedAt", now),
        ),
        (
            "seed_eq_attack",
            Fields::new()
                .set("name", "Sword of QA")
                .set("type", "weapon")
                .set("description", "Povecava attack power za test.")
                .set("icon", "sword")
                .set("quantity", 1)
                .set("active", true)
                .set("battlesRemaining", 0)
                .set("bonus", 15)
                .set("effect", "ATTACK_POWER")
                .set("updatedAt", now),
        ),
    ];

    for (doc_id, fields) in items {
        store
            .upsert_nested(USERS_COLLECTION, owner_uid, EQUIPMENT_SUBCOLLECTION, doc_id, fields)
            .await?;
        debug!(item = doc_id, "Equipment upserted");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryBackend;
    use crate::store::FieldValue;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_two_items_under_owner_profile() {
        let backend = MemoryBackend::new();
        seed_equipment(&backend, "U1", now()).await.unwrap();

        let items = backend.paths_with_prefix("users/U1/equipment/");
        assert_eq!(items.len(), 2);

        let potion = backend.document("users/U1/equipment/seed_eq_pp_boost").unwrap();
        assert_eq!(potion.get("type"), Some(&FieldValue::String("potion".to_string())));
        assert_eq!(potion.get("bonus"), Some(&FieldValue::Integer(10)));
        assert_eq!(potion.get("effect"), Some(&FieldValue::String("BOOST_PP".to_string())));

        let sword = backend.document("users/U1/equipment/seed_eq_attack").unwrap();
        assert_eq!(sword.get("bonus"), Some(&FieldValue::Integer(15)));
        assert_eq!(sword.get("effect"), Some(&FieldValue::String("ATTACK_POWER".to_string())));
    }

    #[tokio::test]
    async fn test_rerun_refreshes_timestamp_in_place() {
        let backend = MemoryBackend::new();
        seed_equipment(&backend, "U1", now()).await.unwrap();

        let later = now() + chrono::Duration::hours(1);
        seed_equipment(&backend, "U1", later).await.unwrap();

        assert_eq!(backend.paths_with_prefix("users/U1/equipment/").len(), 2);
        let potion = backend.document("users/U1/equipment/seed_eq_pp_boost").unwrap();
        assert_eq!(potion.get("updatedAt"), Some(&FieldValue::Timestamp(later)));
    }
}
