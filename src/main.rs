use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use projects::{ProjectDb, ProjectService, SessionController};

#[derive(Parser)]
#[command(name = "projects")]
#[command(about = "Create, list, select, update and delete DIY projects from a console menu")]
struct Cli {
    /// SQLite database file (created if missing)
    #[arg(long, value_name = "FILE", env = "PROJECTS_DATABASE", default_value = "projects.db")]
    database: PathBuf,

    /// Load the sample "Hang a door" project before starting the menu
    #[arg(long)]
    sample_data: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let directive = if verbose { "projects=debug" } else { "projects=warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .context("Invalid log filter")?;

    // stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose)?;

    let db = ProjectDb::new(&args.database)
        .await
        .with_context(|| format!("Failed to open project database {:?}", args.database))?;

    if args.sample_data {
        db.load_sample_data()
            .await
            .context("Failed to load sample data")?;
    }

    let stdin = std::io::stdin();
    let mut controller = SessionController::new(
        ProjectService::new(db),
        stdin.lock(),
        std::io::stdout(),
    );
    let result = controller.run().await;

    let (service, _) = controller.into_parts();
    service.into_repository().close().await?;
    result?;

    Ok(())
}
