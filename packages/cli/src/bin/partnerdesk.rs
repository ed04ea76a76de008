use clap::{Parser, Subcommand};
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::collaborators::{handle_collaborator_command, CollaboratorCommands};
use cli::interactive::run_interactive;
use cli::milestones::{handle_milestone_command, MilestoneCommands};
use cli::partnerships::{handle_partnership_command, PartnershipCommands};
use cli::utils::CommandResult;
use partnerdesk_cli::config::Config;
use partnerdesk_cli::open_app;
use partnerdesk_partnerships::App;

#[derive(Parser)]
#[command(name = "partnerdesk")]
#[command(about = "PartnerDesk - track business partnerships, collaborators, and milestones")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Partnerships(PartnershipCommands),
    /// Manage collaborators of a partnership
    #[command(subcommand)]
    Collaborator(CollaboratorCommands),
    /// Manage milestones of a partnership
    #[command(subcommand)]
    Milestone(MilestoneCommands),
    /// Browse and edit partnerships from a menu
    Interactive,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

async fn run(command: Commands) -> CommandResult {
    let config = Config::from_env()?;
    let mut app = open_app(&config).await?;

    let result = handle_command(command, &mut app, &config).await;
    // Retries a failed save even when the command itself failed
    let shutdown = app.shutdown().await;

    result?;
    shutdown?;
    Ok(())
}

async fn handle_command(command: Commands, app: &mut App, config: &Config) -> CommandResult {
    match command {
        Commands::Partnerships(command) => handle_partnership_command(command, app, config).await,
        Commands::Collaborator(command) => handle_collaborator_command(command, app).await,
        Commands::Milestone(command) => handle_milestone_command(command, app).await,
        Commands::Interactive => run_interactive(app, config).await,
    }
}
