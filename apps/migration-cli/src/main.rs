use auction::config::db::{db_url, is_sqlite_memory, DbProfile};
use auction::connect_db;
use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};
use tracing::{error, info};

#[derive(Clone, ValueEnum)]
enum Env {
    Prod,
    Test,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Auction database migration tool")]
struct Args {
    /// Migration command to run: up | down | fresh | reset | refresh | status
    command: String,

    /// Runtime environment
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,migration_cli=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let Some(command) = MigrationCommand::parse(&args.command) else {
        eprintln!(
            "Unknown command: {}. Use: up | down | fresh | reset | refresh | status",
            args.command
        );
        std::process::exit(2);
    };

    let profile = match args.env {
        Env::Prod => DbProfile::Prod,
        Env::Test => DbProfile::Test,
    };

    let url = match db_url(profile) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    if is_sqlite_memory(&url) {
        eprintln!("In-memory SQLite is discarded when the command exits; point AUCTION_TEST_DATABASE_URL at a file or server.");
        std::process::exit(2);
    }

    let conn = match connect_db(profile).await {
        Ok(conn) => conn,
        Err(e) => {
            error!(error = %e, "Could not connect");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
    info!(command = %args.command, "Migration finished");
}
