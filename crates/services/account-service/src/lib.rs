//! Account Service Library
//!
//! Data access and service composition for users, their addresses, cards and
//! card deposits on PostgreSQL. The binary in `main.rs` exposes the same
//! operations as operator commands.

pub mod commands;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::io::Write;
use std::sync::Arc;

use tracing::info;

use crate::commands::AccountCommands;
use crate::config::AccountServiceConfig;
use crate::infra::{Database, Persistence};
use crate::service::{CardManager, UserManager};

pub use commands::UserListing;

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &AccountServiceConfig,
    action: MigrateAction,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let marker = if applied { "[x]" } else { "[ ]" };
                writeln!(out, "{} {}", marker, name)?;
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Check that the database answers.
pub async fn ping(config: &AccountServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;
    db.ping().await?;
    info!("Database reachable");
    Ok(())
}

/// Connect, apply pending migrations and wire the services.
pub async fn connect(
    config: &AccountServiceConfig,
) -> Result<AccountCommands, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let persistence = Arc::new(Persistence::new(db.get_connection()));

    let users = Arc::new(UserManager::new(persistence.clone()));
    let cards = Arc::new(CardManager::new(persistence));

    Ok(AccountCommands::new(users, cards))
}
