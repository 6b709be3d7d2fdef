mod transfer;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use resto_core::models::{NewRestaurant, NewUser, Restaurant};
use resto_core::traits::{RestaurantStore, UserStore};
use resto_core::{AppError, CategoryService, RestaurantService};
use resto_db::{CategoryRepository, Database, DatabaseConfig, RestaurantRepository};

use crate::transfer::ImportRow;

#[derive(Parser)]
#[command(name = "resto", version, about = "Administer the Restaurants API database")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,

    /// Manage login users
    User {
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Import restaurants from a CSV file (name,address,city,category,rating)
    Import {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Write all restaurants to stdout as CSV
    Export,
}

#[derive(Subcommand)]
enum UserCommand {
    /// Add a user who can log in and obtain a token
    Add {
        #[arg(long)]
        username: String,

        /// Stored as given and compared exactly on login
        #[arg(long, env = "RESTO_USER_PASSWORD", hide_env_values = true)]
        password: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        role: String,

        #[arg(long, default_value = "")]
        surname: String,

        #[arg(long, default_value = "")]
        given_name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so `export` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("resto=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db = connect_db().await?;

    match cli.command {
        Commands::Migrate => {
            db.migrate().await?;
            println!("Migrations applied");
        }
        Commands::User {
            action:
                UserCommand::Add {
                    username,
                    password,
                    email,
                    role,
                    surname,
                    given_name,
                },
        } => {
            let user = NewUser {
                username,
                password,
                email_address: email,
                role,
                surname,
                given_name,
            };
            cmd_user_add(&db, &user).await?;
        }
        Commands::Import { file } => cmd_import(&db, &file).await?,
        Commands::Export => cmd_export(&db).await?,
    }

    Ok(())
}

/// Connect to PostgreSQL using DATABASE_URL.
async fn connect_db() -> Result<Database> {
    let config = DatabaseConfig::from_env()?;
    tracing::debug!(database = %config.redacted_url(), "Connecting");
    Database::connect(&config)
        .await
        .context("Failed to connect to database")
}

async fn cmd_user_add(db: &Database, user: &NewUser) -> Result<()> {
    user.validate()?;
    let created = db.user_repo().insert(user).await?;
    tracing::info!(user_id = created.id, username = %created.username, "User added");
    println!("Added user '{}' (id {})", created.username, created.id);
    Ok(())
}

async fn cmd_import(db: &Database, path: &Path) -> Result<()> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let categories = CategoryService::new(db.category_repo());
    let restaurants = RestaurantService::new(db.restaurant_repo(), db.category_repo());

    let mut imported = 0usize;
    let mut skipped = 0usize;

    for (line, row) in transfer::read_rows(file) {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!(line, error = %e, "Skipping unreadable row");
                skipped += 1;
                continue;
            }
        };

        match import_row(&categories, &restaurants, row).await {
            Ok(_) => imported += 1,
            Err(e) => {
                tracing::warn!(line, error = %e, "Skipping rejected row");
                skipped += 1;
            }
        }
    }

    println!("Imported {imported} restaurants ({skipped} rows skipped)");
    Ok(())
}

/// Resolve the row's category by name, creating it if needed, then create the restaurant.
async fn import_row(
    categories: &CategoryService<CategoryRepository>,
    restaurants: &RestaurantService<RestaurantRepository, CategoryRepository>,
    row: ImportRow,
) -> Result<Restaurant, AppError> {
    let category = categories.find_or_create(&row.category).await?;
    restaurants
        .create(&NewRestaurant {
            name: row.name,
            address: row.address,
            city: row.city,
            category_id: category.id,
            rating: row.rating.unwrap_or_default(),
        })
        .await
}

async fn cmd_export(db: &Database) -> Result<()> {
    let restaurants = db.restaurant_repo().list().await?;
    transfer::write_rows(std::io::stdout().lock(), &restaurants)
        .context("Failed to write CSV")?;
    tracing::info!(count = restaurants.len(), "Export complete");
    Ok(())
}
