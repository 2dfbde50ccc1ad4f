//! habitseed - Firestore fixture seeder for RPGHabitTracker
//!
//! Usage example:
//!   habitseed \
//!     --service-account /path/to/service-account.json \
//!     --project-id rpg-habit-tracker-a9ce8 \
//!     --current-user-id YOUR_FIREBASE_UID \
//!     --current-username YourName \
//!     --with-current-user

use chrono::Utc;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use habitseed::{
    config::Args,
    firebase::{FirestoreClient, IdentityToolkitClient, ServiceAccountKey, TokenProvider},
    fixtures::{self, accounts, alliance, equipment, friendships, tasks, users, SeedUser},
    report::SeedReport,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing/logging
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("habitseed={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("======================================");
    info!("  habitseed - RPGHabitTracker seeder");
    info!("======================================");
    info!("Project: {}", args.project_id);
    info!("Chat messages: {}", args.messages);
    info!("Include current user: {}", args.with_current_user);
    info!("Auth accounts: {}", if args.skip_auth_users { "skipped" } else { "enabled" });
    info!("======================================");

    // Load the service-account key; the path was validated above
    let service_account = args
        .service_account
        .clone()
        .unwrap_or_default();
    let key = match ServiceAccountKey::from_file(&service_account) {
        Ok(key) => key,
        Err(e) => {
            error!("Failed to load service account: {}", e);
            std::process::exit(1);
        }
    };

    // One eager token exchange verifies the credentials before any write
    let token = Arc::new(TokenProvider::new(key));
    match token.bearer().await {
        Ok(_) => info!("Authenticated with service account"),
        Err(e) => {
            error!("Authentication failed: {}", e);
            std::process::exit(1);
        }
    }

    let firestore = FirestoreClient::new(&args.project_id, Arc::clone(&token));
    let auth_client = IdentityToolkitClient::new(&args.project_id, Arc::clone(&token));

    let bots = fixtures::seed_bots();
    let mut all_users = bots.clone();

    let owner = if args.with_current_user {
        // validate() guarantees the uid is present here
        let owner_uid = args.current_user_id.clone().unwrap_or_default();
        let owner = fixtures::current_user(&owner_uid, &args.current_username);
        all_users.push(owner.clone());
        Some(owner)
    } else {
        None
    };

    users::seed_user_profiles(&firestore, &all_users, Utc::now()).await?;
    info!(count = all_users.len(), "User profiles seeded");

    let mut auth_users: Vec<SeedUser> = bots.clone();
    if args.include_current_user_auth {
        if let Some(owner) = &owner {
            auth_users.push(owner.clone());
        }
    }

    let auth_outcome = if args.skip_auth_users {
        None
    } else {
        let outcome = accounts::seed_auth_accounts(&auth_client, &auth_users, &args.auth_password).await;
        info!(
            created = outcome.created.len(),
            updated = outcome.updated.len(),
            failed = outcome.failed.len(),
            "Auth accounts seeded"
        );
        Some(outcome)
    };

    if let Some(owner) = &owner {
        friendships::seed_friendships(&firestore, &owner.uid, &bots, Utc::now()).await?;
        info!("Friendships seeded");

        alliance::seed_alliance(
            &firestore,
            &owner.uid,
            &owner.username,
            &bots,
            args.messages,
            Utc::now(),
        )
        .await?;
        info!("Alliance and chat seeded");

        tasks::seed_tasks(&firestore, &owner.uid, tasks::DEFAULT_OWNER_LEVEL, Utc::now()).await?;
        info!("Tasks seeded");

        equipment::seed_equipment(&firestore, &owner.uid, Utc::now()).await?;
        info!("Equipment seeded");
    }

    let report = SeedReport {
        project_id: args.project_id.clone(),
        users: all_users
            .iter()
            .map(|u| (u.uid.clone(), u.username.clone()))
            .collect(),
        auth: auth_outcome,
        auth_emails: auth_users.iter().map(|u| u.email.clone()).collect(),
        auth_password: args.auth_password.clone(),
        owner_uid: owner.map(|o| o.uid),
    };
    report.print();

    Ok(())
}
