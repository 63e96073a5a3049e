use clap::Parser;
use configuration::load_settings;
use database::connection::{connect, run_migrations};
use database::repository::PetRepository;
use session::Session;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// A small interactive browser and editor for the pets database.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

/// The main entry point for the petdesk application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // No flags to act on; parsing still gives us --help and --version.
    Cli::parse();

    println!("Starting the program...");

    // Database problems degrade to "nothing to show" rather than a crash,
    // so every early return below is a graceful exit.
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load database settings.");
            println!("No pets available to display.");
            println!("Program has ended.");
            return Ok(());
        }
    };

    let pool = match connect(&settings).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Database connection error.");
            println!("No pets found in the database.");
            println!("Program has ended.");
            return Ok(());
        }
    };
    tracing::info!("Successfully connected to the database.");

    if let Err(e) = run_migrations(&pool).await {
        // The schema usually exists already; a failed migration is only fatal
        // if the subsequent fetch fails too.
        tracing::warn!(error = %e, "Could not apply database migrations.");
    }

    let repository = PetRepository::new(pool);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(repository, stdin.lock(), stdout.lock());
    session.run().await?;

    println!("Program has ended.");
    Ok(())
}
