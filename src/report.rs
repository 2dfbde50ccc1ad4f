//! End-of-run summary
//!
//! The summary is the tool's primary output and goes straight to stdout;
//! progress and diagnostics stay on the tracing side.

use crate::fixtures::accounts::AuthSeedOutcome;
use crate::fixtures::SEED_ALLIANCE_ID;

/// Everything the summary needs, collected by the orchestrator
#[derive(Debug)]
pub struct SeedReport {
    pub project_id: String,
    /// (uid, username) for every seeded profile
    pub users: Vec<(String, String)>,
    /// Auth outcome, or `None` when the phase was skipped
    pub auth: Option<AuthSeedOutcome>,
    /// Emails of the accounts the auth phase processed
    pub auth_emails: Vec<String>,
    pub auth_password: String,
    pub owner_uid: Option<String>,
}

impl SeedReport {
    /// Render the summary as the exact text printed to stdout
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("Seed completed.\n");
        out.push_str(&format!("Project: {}\n", self.project_id));
        out.push_str("Users seeded:\n");
        for (uid, username) in &self.users {
            out.push_str(&format!("  - {uid} ({username})\n"));
        }

        match &self.auth {
            Some(outcome) => {
                out.push_str("Auth users seeded (email verified = true):\n");
                out.push_str(&format!("  - created: {}\n", outcome.created.len()));
                out.push_str(&format!("  - updated: {}\n", outcome.updated.len()));
                out.push_str(&format!("  - failed: {}\n", outcome.failed.len()));
                if !outcome.failed.is_empty() {
                    out.push_str("Failed auth entries:\n");
                    for entry in &outcome.failed {
                        out.push_str(&format!("  - {entry}\n"));
                    }
                }
                out.push_str("Login credentials for seed auth users:\n");
                for email in &self.auth_emails {
                    out.push_str(&format!("  - {email} / {}\n", self.auth_password));
                }
            }
            None => {
                out.push_str("Auth user creation skipped (--skip-auth-users).\n");
            }
        }

        match &self.owner_uid {
            Some(owner_uid) => {
                out.push_str(&format!(
                    "Alliance seeded: {SEED_ALLIANCE_ID} (owner: {owner_uid})\n"
                ));
                out.push_str("Friendships/tasks/equipment/chat seeded for current user.\n");
            }
            None => {
                out.push_str("Only standalone seed users were created.\n");
                out.push_str(
                    "Tip: use --with-current-user --current-user-id <UID> for full in-app test data.\n",
                );
            }
        }

        out
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_report() -> SeedReport {
        SeedReport {
            project_id: "rpg-habit-tracker-a9ce8".to_string(),
            users: vec![
                ("seed_user_mila".to_string(), "MilaQuest".to_string()),
                ("seed_user_luka".to_string(), "LukaDaily".to_string()),
            ],
            auth: None,
            auth_emails: vec![],
            auth_password: "SeedPass123!".to_string(),
            owner_uid: None,
        }
    }

    #[test]
    fn test_render_without_owner_or_auth() {
        let text = base_report().render();
        assert!(text.starts_with("Seed completed.\n"));
        assert!(text.contains("Project: rpg-habit-tracker-a9ce8"));
        assert!(text.contains("  - seed_user_mila (MilaQuest)"));
        assert!(text.contains("Auth user creation skipped (--skip-auth-users)."));
        assert!(text.contains("Only standalone seed users were created."));
        assert!(text.contains("Tip: use --with-current-user"));
    }

    #[test]
    fn test_render_auth_outcome_and_credentials() {
        let mut report = base_report();
        report.auth = Some(AuthSeedOutcome {
            created: vec!["seed_user_mila".to_string(), "seed_user_luka".to_string()],
            updated: vec!["seed_user_ana".to_string()],
            failed: vec!["seed_user_vuk: boom".to_string()],
        });
        report.auth_emails = vec!["mila.quest@example.com".to_string()];

        let text = report.render();
        assert!(text.contains("  - created: 2"));
        assert!(text.contains("  - updated: 1"));
        assert!(text.contains("  - failed: 1"));
        assert!(text.contains("  - seed_user_vuk: boom"));
        assert!(text.contains("  - mila.quest@example.com / SeedPass123!"));
    }

    #[test]
    fn test_render_owner_confirmation() {
        let mut report = base_report();
        report.owner_uid = Some("U1".to_string());

        let text = report.render();
        assert!(text.contains("Alliance seeded: seed_alliance_alpha (owner: U1)"));
        assert!(text.contains("Friendships/tasks/equipment/chat seeded for current user."));
        assert!(!text.contains("Only standalone seed users"));
    }
}
