//! Configuration for habitseed
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::path::PathBuf;

/// habitseed - seed Firestore with RPGHabitTracker test data
///
/// Creates (or updates) users, friendships, alliance data, alliance chat
/// messages, tasks and equipment so core app flows are easy to test.
#[derive(Parser, Debug, Clone)]
#[command(name = "habitseed")]
#[command(about = "Seed Firestore with RPGHabitTracker test data")]
#[command(version)]
pub struct Args {
    /// Path to the Firebase service account JSON key
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    pub service_account: Option<PathBuf>,

    /// Firebase project id
    #[arg(long, env = "FIREBASE_PROJECT_ID", default_value = "rpg-habit-tracker-a9ce8")]
    pub project_id: String,

    /// UID of the real user to wire into friendships/alliance fixtures
    #[arg(long, env = "RPG_CURRENT_USER_ID")]
    pub current_user_id: Option<String>,

    /// Display username for the current user if the seeder creates/updates that user
    #[arg(long, env = "RPG_CURRENT_USERNAME", default_value = "LocalTester")]
    pub current_username: String,

    /// How many alliance chat messages to seed (at least one is always written)
    #[arg(long, default_value = "12")]
    pub messages: u32,

    /// Include the current user in alliance/friendships/tasks. Requires --current-user-id.
    #[arg(long)]
    pub with_current_user: bool,

    /// Password used for seeded Firebase Auth accounts
    #[arg(long, env = "RPG_SEED_AUTH_PASSWORD", default_value = "SeedPass123!")]
    pub auth_password: String,

    /// Skip creating/updating Firebase Auth accounts for seed users
    #[arg(long)]
    pub skip_auth_users: bool,

    /// Also create/update Firebase Auth for --current-user-id (off by default for safety)
    #[arg(long)]
    pub include_current_user_auth: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Validate configuration before any backend call
    pub fn validate(&self) -> Result<(), String> {
        let path = match &self.service_account {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => {
                return Err(
                    "No service account path provided. Use --service-account or set \
                     GOOGLE_APPLICATION_CREDENTIALS."
                        .to_string(),
                )
            }
        };

        if !path.exists() {
            return Err(format!("Service account file not found: {}", path.display()));
        }

        if self.with_current_user && self.current_user_id.as_deref().unwrap_or("").is_empty() {
            return Err("--with-current-user requires --current-user-id".to_string());
        }

        if self.auth_password.len() < 6 {
            return Err("--auth-password must be at least 6 characters long".to_string());
        }

        Ok(())
    }
}
