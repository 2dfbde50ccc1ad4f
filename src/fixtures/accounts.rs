//! Authentication account write phase
//!
//! Unlike the document phases, account operations are fault-isolated per
//! item: failures land in the `failed` bucket and the loop continues, so
//! one broken account never aborts the run.

use tracing::{debug, warn};

use super::SeedUser;
use crate::store::{AccountProvider, AccountSpec};

/// Per-item outcomes of the account phase, aggregated for the report
#[derive(Debug, Default)]
pub struct AuthSeedOutcome {
    pub created: Vec<String>,
    pub updated: Vec<String>,
    pub failed: Vec<String>,
}

/// Create or update one auth account per user, all marked email-verified
/// and enabled, with the shared seed password.
pub async fn seed_auth_accounts(
    provider: &dyn AccountProvider,
    users: &[SeedUser],
    password: &str,
) -> AuthSeedOutcome {
    let mut outcome = AuthSeedOutcome::default();

    for user in users {
        let spec = AccountSpec {
            uid: user.uid.clone(),
            email: user.email.clone(),
            password: password.to_string(),
            display_name: user.username.clone(),
            email_verified: true,
            disabled: false,
        };

        match provider.lookup(&user.uid).await {
            Ok(Some(_)) => match provider.update(&spec).await {
                Ok(()) => {
                    debug!(uid = %user.uid, "Auth account updated");
                    outcome.updated.push(user.uid.clone());
                }
                Err(e) => {
                    warn!(uid = %user.uid, error = %e, "Auth account update failed");
                    outcome.failed.push(format!("{}: {}", user.uid, e));
                }
            },
            Ok(None) => match provider.create(&spec).await {
                Ok(()) => {
                    debug!(uid = %user.uid, "Auth account created");
                    outcome.created.push(user.uid.clone());
                }
                Err(e) => {
                    warn!(uid = %user.uid, error = %e, "Auth account creation failed");
                    outcome.failed.push(format!("{}: {}", user.uid, e));
                }
            },
            Err(e) => {
                warn!(uid = %user.uid, error = %e, "Auth account lookup failed");
                outcome.failed.push(format!("{}: {}", user.uid, e));
            }
        }
    }

    outcome
}
