//! Account Service - operator CLI over the account stores.

use std::io;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use account_service_lib::config::AccountServiceConfig;
use account_service_lib::{MigrateAction, UserListing};
use domain::UserQueryOptions;

#[derive(Parser)]
#[command(name = "account-service")]
#[command(about = "User, address and card data access")]
struct Cli {
    /// Override the database URL from the environment
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// List users
    Users {
        #[arg(long)]
        email: Option<String>,
        /// Joined fetch of users that have an address
        #[arg(long, conflicts_with = "all")]
        with_address: bool,
        /// Every user with its address, deleted ones included
        #[arg(long)]
        all: bool,
    },
    /// Show one user with its address
    User(UserLookup),
    /// List active cards
    Cards {
        #[arg(long)]
        user_id: Option<Uuid>,
    },
    /// List active deposits of a card
    Deposits { card_id: Uuid },
    /// Check database connectivity
    Ping,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct UserLookup {
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    id: Option<String>,
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut config = AccountServiceConfig::from_env();
    if let Some(url) = cli.database_url {
        config.database = config.database.with_url(url);
    }

    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            account_service_lib::run_migrations(&config, migrate_action, &mut out).await?;
        }
        Commands::Ping => account_service_lib::ping(&config).await?,
        command => {
            let commands = account_service_lib::connect(&config).await?;
            match command {
                Commands::Users {
                    email,
                    with_address,
                    all,
                } => {
                    let listing = if with_address {
                        UserListing::WithAddress
                    } else if all {
                        UserListing::All
                    } else {
                        UserListing::Active
                    };
                    commands.users(listing, email, &mut out).await?;
                }
                Commands::User(lookup) => {
                    let opts = match (lookup.email, lookup.id) {
                        (Some(email), _) => UserQueryOptions::new().email(email),
                        (None, Some(id)) => UserQueryOptions::new().id(id),
                        (None, None) => UserQueryOptions::new(),
                    };
                    commands.user(opts, &mut out).await?;
                }
                Commands::Cards { user_id } => commands.cards(user_id, &mut out).await?,
                Commands::Deposits { card_id } => commands.deposits(card_id, &mut out).await?,
                Commands::Migrate { .. } | Commands::Ping => {}
            }
        }
    }

    Ok(())
}
