use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use nutrition_tracker::commands::prompts::TerminalReader;
use nutrition_tracker::providers::azure::AzureVisionProvider;
use nutrition_tracker::{AppConfig, Database, Session, SessionOutcome};
use std::path::PathBuf;
use std::process::ExitCode;

/// Logs the nutrition in a food label or grocery photo against your daily goals.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// User ID to log for (prompted when omitted)
    #[arg(long)]
    user_id: Option<String>,

    /// Image to analyze (prompted when omitted)
    #[arg(long)]
    image: Option<PathBuf>,

    /// SQLite database path, overrides DATABASE_URL
    #[arg(long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match run(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_message(&e).red());
            ExitCode::FAILURE
        }
    }
}

fn failure_message(error: &anyhow::Error) -> String {
    format!("❌ {:#}", error)
}

async fn run(args: Args) -> anyhow::Result<SessionOutcome> {
    let mut config = AppConfig::from_env().context("failed to load configuration")?;
    if let Some(database) = args.database {
        config.database_url = database;
    }

    let reference = config
        .food
        .load()
        .context("failed to load food reference data")?;
    log::debug!(
        "Reference data: {} foods, {} quantity rules",
        reference.table.len(),
        reference.rules.len()
    );

    let db = Database::new(&config.database_url)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;

    let vision = AzureVisionProvider::new(config.vision.clone());
    let session = Session {
        recognizer: &vision,
        describer: &vision,
        reference: &reference,
        db: &db,
        history_days: config.history_days,
    };

    let mut reader = TerminalReader::new().context("failed to open terminal input")?;
    let today = chrono::Local::now().date_naive();

    let outcome = session.run(&mut reader, args.user_id, args.image, today).await?;
    Ok(outcome)
}
