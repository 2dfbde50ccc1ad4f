//! Fixture data and write phases
//!
//! The fixed cast of seed bots, the optional caller-designated current
//! user, and one module per write phase. Identifiers are stable across
//! runs so every phase is an idempotent merge-upsert.

pub mod accounts;
pub mod alliance;
pub mod equipment;
pub mod friendships;
pub mod tasks;
pub mod users;

/// Document-store collection names
pub const USERS_COLLECTION: &str = "users";
pub const FRIENDSHIPS_COLLECTION: &str = "friendships";
pub const ALLIANCES_COLLECTION: &str = "alliances";
pub const TASKS_COLLECTION: &str = "tasks";
pub const MESSAGES_SUBCOLLECTION: &str = "messages";
pub const EQUIPMENT_SUBCOLLECTION: &str = "equipment";

/// Fixed id of the seeded alliance
pub const SEED_ALLIANCE_ID: &str = "seed_alliance_alpha";

/// One synthetic or caller-designated user to seed
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub uid: String,
    pub username: String,
    pub email: String,
    pub avatar: String,
    pub level: i64,
    pub title: String,
    pub xp: i64,
    pub coins: i64,
    pub pp: i64,
}

impl SeedUser {
    #[allow(clippy::too_many_arguments)]
    fn new(
        uid: &str,
        username: &str,
        email: &str,
        avatar: &str,
        level: i64,
        title: &str,
        xp: i64,
        coins: i64,
        pp: i64,
    ) -> Self {
        Self {
            uid: uid.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            avatar: avatar.to_string(),
            level,
            title: title.to_string(),
            xp,
            coins,
            pp,
        }
    }
}

/// The four always-created seed bots, in fixture order
pub fn seed_bots() -> Vec<SeedUser> {
    vec![
        SeedUser::new("seed_user_mila", "MilaQuest", "mila.quest@example.com", "avatar_2", 6, "Ratnik", 980, 760, 120),
        SeedUser::new("seed_user_luka", "LukaDaily", "luka.daily@example.com", "avatar_3", 5, "Borac", 720, 530, 95),
        SeedUser::new("seed_user_ana", "AnaFocus", "ana.focus@example.com", "avatar_4", 4, "Avanturista", 510, 390, 80),
        SeedUser::new("seed_user_vuk", "VukStrong", "vuk.strong@example.com", "avatar_5", 7, "Vitez", 1300, 1120, 155),
    ]
}

/// Seed description of the caller-designated current user
pub fn current_user(uid: &str, username: &str) -> SeedUser {
    SeedUser::new(
        uid,
        username,
        &format!("{}@seed.local", short_uid(uid)),
        "avatar_1",
        4,
        "Avanturista",
        560,
        480,
        85,
    )
}

/// First eight characters of a uid, used in derived identifiers
pub(crate) fn short_uid(uid: &str) -> String {
    uid.chars().take(8).collect()
}

/// Friendship edge status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendshipStatus {
    Pending,
    Accepted,
}

impl FriendshipStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FriendshipStatus::Pending => "PENDING",
            FriendshipStatus::Accepted => "ACCEPTED",
        }
    }
}

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Active,
    Completed,
    Failed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Active => "ACTIVE",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Failed => "FAILED",
        }
    }
}

/// Task difficulty tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    VeryEasy,
    Easy,
    Hard,
    Extreme,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::VeryEasy => "VERY_EASY",
            Difficulty::Easy => "EASY",
            Difficulty::Hard => "HARD",
            Difficulty::Extreme => "EXTREME",
        }
    }
}

/// Task importance tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Importance {
    Normal,
    Important,
    VeryImportant,
    Special,
}

impl Importance {
    pub fn as_str(self) -> &'static str {
        match self {
            Importance::Normal => "NORMAL",
            Importance::Important => "IMPORTANT",
            Importance::VeryImportant => "VERY_IMPORTANT",
            Importance::Special => "SPECIAL",
        }
    }
}
