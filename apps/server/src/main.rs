use anyhow::Context;
use clap::{Parser, Subcommand};
use rollcall_config::load as load_config;
use rollcall_gateway::{create_router, GatewayState};
use rollcall_roles::DirectoryService;
use rollcall_runtime::{telemetry, BackendServices};
use sqlx::Row;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "rollcall-server")]
#[command(about = "Rollcall role directory backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Dump roles and memberships from the database
    DumpData,
    /// Seed the database with sample roles and members
    SeedData,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server().await,
        Commands::DumpData => dump_data().await,
        Commands::SeedData => seed_data().await,
    }
}

async fn run_server() -> anyhow::Result<()> {
    telemetry::init_tracing().context("failed to initialise tracing")?;

    info!("starting Rollcall backend");

    let config = load_config().context("failed to load configuration")?;

    let services = BackendServices::initialise(&config)
        .await
        .context("failed to initialise backend services")?;

    let state = GatewayState::new(services.db_pool.clone());
    let app = create_router(state);

    let address = format!("{}:{}", config.http.address, config.http.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind http listener on {address}"))?;

    info!(%address, "http server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(rollcall_runtime::shutdown_signal())
        .await
        .context("http server error")?;

    info!("backend shut down");
    Ok(())
}

async fn dump_data() -> anyhow::Result<()> {
    telemetry::init_tracing().context("failed to initialise tracing")?;

    let config = load_config().context("failed to load configuration")?;
    let services = BackendServices::initialise(&config)
        .await
        .context("failed to initialise backend services")?;

    let roles = sqlx::query("SELECT id, chat_id, name FROM roles ORDER BY chat_id, name")
        .fetch_all(&services.db_pool)
        .await
        .context("failed to fetch roles")?;

    println!("=== ROLES ===");
    if roles.is_empty() {
        println!("No roles found in database");
    } else {
        println!("{:<8} {:<15} {:<30}", "ID", "Chat ID", "Name");
        for row in &roles {
            println!(
                "{:<8} {:<15} {:<30}",
                row.get::<i64, _>("id"),
                row.get::<i64, _>("chat_id"),
                row.get::<String, _>("name"),
            );
        }
    }

    let members = sqlx::query(
        "SELECT role_users.role_id, roles.name, role_users.user_id, role_users.username \
         FROM role_users JOIN roles ON roles.id = role_users.role_id \
         ORDER BY role_users.role_id, role_users.user_id",
    )
    .fetch_all(&services.db_pool)
    .await
    .context("failed to fetch memberships")?;

    println!();
    println!("=== MEMBERSHIPS ===");
    if members.is_empty() {
        println!("No memberships found in database");
    } else {
        println!(
            "{:<10} {:<20} {:<12} {:<25}",
            "Role ID", "Role", "User ID", "Username"
        );
        for row in &members {
            println!(
                "{:<10} {:<20} {:<12} {:<25}",
                row.get::<i64, _>("role_id"),
                row.get::<String, _>("name"),
                row.get::<i64, _>("user_id"),
                row.get::<String, _>("username"),
            );
        }
    }

    Ok(())
}

async fn seed_data() -> anyhow::Result<()> {
    telemetry::init_tracing().context("failed to initialise tracing")?;

    let config = load_config().context("failed to load configuration")?;
    let services = BackendServices::initialise(&config)
        .await
        .context("failed to initialise backend services")?;

    // Seed through the directory service so the usual validation applies.
    let directory = DirectoryService::new(services.db_pool.clone());
    let chat_id = 1;

    for name in ["designers", "backend", "oncall"] {
        match directory.create_role(chat_id, name).await {
            Ok(role) => info!(role = %role.name, role_id = role.id, "seeded role"),
            Err(rollcall_roles::RoleError::DuplicateRole { name }) => {
                info!(role = %name, "role already present, skipping")
            }
            Err(e) => return Err(e).context("failed to seed role"),
        }
    }

    directory.join_role(chat_id, "designers", 1001, "alice").await?;
    directory.join_role(chat_id, "designers", 1002, "bob").await?;
    directory.join_role(chat_id, "backend", 1002, "bob").await?;
    directory.join_role(chat_id, "oncall", 1003, "").await?;

    info!("seed data applied");
    Ok(())
}
