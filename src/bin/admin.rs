//! CLI administration tool for users-api.
//!
//! Issues session cookies and manages users in the PostgreSQL store without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Issue an admin session cookie for curl
//! cargo run --bin admin -- token issue --email admin@example.com --role admin
//!
//! # Manage users
//! cargo run --bin admin -- user list
//! cargo run --bin admin -- user add --name "Jane" --email jane@example.com --admin
//! cargo run --bin admin -- user add -n "Bob" -e bob@example.com -p 'Password@1' -y
//! cargo run --bin admin -- user delete 3
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `JWT_SECRET`, `COOKIE_SECRET`, `COOKIE_NAME`, `JWT_EXPIRATION_SECONDS` - for `token`
//! - `DATABASE_URL` (or `DB_*` components) - for `user` and `db`
//! - `BCRYPT_COST` - for `user add`

use users_api::config::{self, Config};
use users_api::domain::entities::{NewUser, User, UserRole};
use users_api::domain::repositories::UserRepository;
use users_api::infrastructure::persistence::PgUserRepository;
use users_api::utils::jwt::JwtCodec;
use users_api::utils::password::hash_password;
use users_api::utils::signed_cookie::CookieSigner;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing users-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Issue session cookies
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Manage users in PostgreSQL
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Standard,
    Admin,
}

impl From<RoleArg> for UserRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Standard => UserRole::Standard,
            RoleArg::Admin => UserRole::Admin,
        }
    }
}

#[derive(Subcommand)]
enum TokenAction {
    /// Print a signed session cookie for the given identity
    Issue {
        #[arg(short, long)]
        email: String,

        #[arg(long, default_value_t = 0)]
        id: i64,

        #[arg(short, long, default_value = "Admin")]
        name: String,

        #[arg(short, long, value_enum, default_value_t = RoleArg::Admin)]
        role: RoleArg,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,

    /// Add a user (prompts for missing fields)
    Add {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Password; prompted with confirmation when omitted
        #[arg(short, long)]
        password: Option<String>,

        /// Grant the admin role
        #[arg(long)]
        admin: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Delete a user by id
    Delete { id: i64 },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Token { action } => handle_token_action(action)?,
        Commands::User { action } => {
            let pool = connect().await?;
            handle_user_action(action, &pool).await?
        }
        Commands::Db { action } => {
            let pool = connect().await?;
            handle_db_action(action, &pool).await?
        }
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = Config::load_database_url()?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

fn handle_token_action(action: TokenAction) -> Result<()> {
    let TokenAction::Issue {
        email,
        id,
        name,
        role,
    } = action;

    let config = config::load_from_env()?;
    let jwt = JwtCodec::new(&config.jwt_secret, config.jwt_expiration_seconds);
    let signer = CookieSigner::new(&config.cookie.secret);

    let user = User {
        id,
        name,
        email,
        role: role.into(),
        pwd_hash: None,
    };
    let token = jwt.encode(&jwt.claims_for(&user))?;
    let cookie = signer.sign(&token);

    println!("{}", "Session cookie".bright_blue().bold());
    println!();
    println!("  Name:    {}", config.cookie.name.cyan());
    println!("  Value:   {}", cookie.bright_yellow());
    println!(
        "  Expires: {}s",
        config.jwt_expiration_seconds.to_string().bright_black()
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -b \"{}={}\" http://localhost:3000/api/users/all",
        config.cookie.name, cookie
    );
    println!();

    Ok(())
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    match action {
        UserAction::List => list_users(&repo).await,
        UserAction::Add {
            name,
            email,
            password,
            admin,
            yes,
        } => add_user(&repo, name, email, password, admin, yes).await,
        UserAction::Delete { id } => delete_user(&repo, id).await,
    }
}

/// Lists users as a table.
async fn list_users(repo: &PgUserRepository) -> Result<()> {
    println!("{}", "Users".bright_blue().bold());
    println!();

    let users = repo
        .get_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<25} {:<35} {:<8}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Role".bright_white().bold()
    );
    println!("  {}", "-".repeat(75).bright_black());

    for user in &users {
        let role = match user.role {
            UserRole::Admin => "admin".green(),
            UserRole::Standard => "standard".normal(),
        };

        println!(
            "  {:<5} {:<25} {:<35} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.email,
            role
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Adds a user, prompting for anything not given on the command line.
async fn add_user(
    repo: &PgUserRepository,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    admin: bool,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Add User".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };

    let role = if admin {
        UserRole::Admin
    } else {
        UserRole::Standard
    };

    if !skip_confirm {
        println!("  Name:  {}", name.cyan());
        println!("  Email: {}", email.cyan());
        println!("  Role:  {:?}", role);
        println!();

        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let cost = std::env::var("BCRYPT_COST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);
    let pwd_hash = hash_password(&password, cost)?;

    let user = repo
        .add(NewUser {
            name,
            email,
            role,
            pwd_hash: Some(pwd_hash),
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "User created successfully".green().bold(),
        user.id
    );
    println!();

    Ok(())
}

/// Deletes a user after confirmation (default: No).
async fn delete_user(repo: &PgUserRepository, id: i64) -> Result<()> {
    let confirmed = Confirm::new()
        .with_prompt(format!("Delete user {id}?"))
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "Cancelled".red());
        return Ok(());
    }

    repo.delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!("{}", "User deleted".green().bold());
    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            println!("{}", "Database connection OK".green().bold());
            println!("  {}", version.bright_black());
        }
    }

    Ok(())
}
