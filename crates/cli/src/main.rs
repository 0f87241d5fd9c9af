//! Samaj CLI - Database migrations and admin account management.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! samaj-cli migrate
//!
//! # Create an admin account (password generated and printed once)
//! samaj-cli admin create -e seva@samaj.org -n "Seva Admin" -r super_admin
//!
//! # Change an account's role
//! samaj-cli admin set-role -e seva@samaj.org -r standard_admin
//!
//! # Deactivate an account (forces logout on its next request)
//! samaj-cli admin deactivate -e seva@samaj.org
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `admin create` - Create admin accounts
//! - `admin set-role` - Change an account's role
//! - `admin activate` / `admin deactivate` - Toggle an account

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "samaj-cli")]
#[command(author, version, about = "Samaj portal CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage admin accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin account
    Create {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account holder's full name
        #[arg(short = 'n', long)]
        full_name: String,

        /// Account role (`standard_admin`, `super_admin`)
        #[arg(short, long, default_value = "standard_admin")]
        role: String,

        /// Initial password; generated and printed once when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Change an account's role
    SetRole {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// New role (`standard_admin`, `super_admin`)
        #[arg(short, long)]
        role: String,
    },
    /// Reactivate a deactivated account
    Activate {
        /// Account email address
        #[arg(short, long)]
        email: String,
    },
    /// Deactivate an account; its tokens stop working on the next request
    Deactivate {
        /// Account email address
        #[arg(short, long)]
        email: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                full_name,
                role,
                password,
            } => {
                commands::admin::create_account(&email, &full_name, &role, password.as_deref())
                    .await?;
            }
            AdminAction::SetRole { email, role } => {
                commands::admin::set_role(&email, &role).await?;
            }
            AdminAction::Activate { email } => {
                commands::admin::set_active(&email, true).await?;
            }
            AdminAction::Deactivate { email } => {
                commands::admin::set_active(&email, false).await?;
            }
        },
    }
    Ok(())
}
