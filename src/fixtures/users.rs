//! User profile write phase

use chrono::{DateTime, Utc};
use tracing::debug;

use super::{SeedUser, USERS_COLLECTION};
use crate::store::{DocumentStore, FieldValue, Fields};
use crate::types::Result;

/// Merge-upsert one profile document per user, all stamped with the same
/// `now`. A failed write aborts the whole run.
pub async fn seed_user_profiles(
    store: &dyn DocumentStore,
    users: &[SeedUser],
    now: DateTime<Utc>,
) -> Result<()> {
    for user in users {
        let fields = Fields::new()
            .set("userId", user.uid.as_str())
            .set("username", user.username.as_str())
            .set("usernameLower", user.username.to_lowercase())
            .set("email", user.email.as_str())
            .set("avatar", user.avatar.as_str())
            .set("level", user.level)
            .set("title", user.title.as_str())
            .set("xp", user.xp)
            .set("coins", user.coins)
            .set("powerPoints", user.pp)
            .set("basePowerPoints", user.pp)
            .set("bossLevel", 1)
            .set("totalTasksCompleted", 18)
            .set("totalTasksCreated", 28)
            .set("totalTasksFailed", 5)
            .set("currentStreak", 4)
            .set("longestStreak", 9)
            .set("badges", vec!["first_steps", "consistency_7"])
            .set("allianceId", FieldValue::Null)
            .set("createdAt", now)
            .set("lastUpdated", now);

        store.upsert(USERS_COLLECTION, &user.uid, fields).await?;
        debug!(uid = %user.uid, "User profile upserted");
    }

    Ok(())
}
