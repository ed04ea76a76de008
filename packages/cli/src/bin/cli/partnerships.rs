use super::utils::{print_outcome, CommandResult};
use clap::Subcommand;
use colored::*;
use inquire::Confirm;
use partnerdesk_cli::config::Config;
use partnerdesk_cli::lookup::{require_partnership, update_intent};
use partnerdesk_cli::views::{render_details, render_list, DetailsTab, PartnershipForm};
use partnerdesk_formatter::write_agreement;
use partnerdesk_partnerships::{
    App, Intent, PartnershipStatus, PartnershipType, PartnershipUpdateInput,
};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum PartnershipCommands {
    /// List all partnerships
    List,
    /// Show partnership details
    Show {
        /// Partnership ID to show (defaults to the first partnership)
        id: Option<String>,
        /// Details tab to show
        #[arg(short, long, value_enum, default_value = "overview")]
        tab: DetailsTab,
    },
    /// Create a new partnership
    Create {
        /// Company name
        #[arg(short, long)]
        company: Option<String>,
        /// Contact email
        #[arg(short, long)]
        email: Option<String>,
        /// Industry
        #[arg(short, long)]
        industry: Option<String>,
        /// Description of the partnership
        #[arg(short, long)]
        description: Option<String>,
        /// Partnership type (strategic, technology, marketing, distribution, joint-venture)
        #[arg(short = 't', long = "type")]
        partnership_type: Option<PartnershipType>,
        /// Expected value, e.g. "$100K"
        #[arg(long)]
        expected_value: Option<String>,
        /// Timeline, e.g. "Q1 2024"
        #[arg(long)]
        timeline: Option<String>,
    },
    /// Update fields of an existing partnership
    Update {
        /// Partnership ID to update
        id: String,
        #[arg(short, long)]
        company: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        industry: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short = 't', long = "type")]
        partnership_type: Option<PartnershipType>,
        #[arg(long)]
        expected_value: Option<String>,
        #[arg(long)]
        timeline: Option<String>,
        #[arg(short, long)]
        status: Option<PartnershipStatus>,
    },
    /// Change the status of a partnership
    Status {
        /// Partnership ID
        id: String,
        /// New status (pending, active, completed, cancelled)
        status: PartnershipStatus,
    },
    /// Delete a partnership
    Delete {
        /// Partnership ID to delete
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Write the partnership agreement to a text file
    Export {
        /// Partnership ID to export
        id: String,
        /// Output directory (defaults to PARTNERDESK_EXPORT_DIR or the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

pub async fn handle_partnership_command(
    command: PartnershipCommands,
    app: &mut App,
    config: &Config,
) -> CommandResult {
    match command {
        PartnershipCommands::List => list_partnerships(app),
        PartnershipCommands::Show { id, tab } => show_partnership(app, id.as_deref(), tab),
        PartnershipCommands::Create {
            company,
            email,
            industry,
            description,
            partnership_type,
            expected_value,
            timeline,
        } => {
            let form = PartnershipForm {
                company_name: company,
                contact_email: email,
                industry,
                description,
                partnership_type,
                expected_value,
                timeline,
            };
            create_partnership(app, form).await
        }
        PartnershipCommands::Update {
            id,
            company,
            email,
            industry,
            description,
            partnership_type,
            expected_value,
            timeline,
            status,
        } => {
            let updates = PartnershipUpdateInput {
                company_name: company,
                contact_email: email,
                industry,
                description,
                partnership_type,
                expected_value,
                timeline,
                status,
                ..Default::default()
            };
            update_partnership(app, &id, updates).await
        }
        PartnershipCommands::Status { id, status } => {
            update_partnership(app, &id, PartnershipUpdateInput::status(status)).await
        }
        PartnershipCommands::Delete { id, yes } => delete_partnership(app, &id, yes).await,
        PartnershipCommands::Export { id, out } => {
            let dir = out.unwrap_or_else(|| config.export_dir.clone());
            export_agreement(app, &id, dir).await
        }
    }
}

fn list_partnerships(app: &App) -> CommandResult {
    println!("{}", render_list(app.partnerships(), app.selection().selected_id()));
    Ok(())
}

fn show_partnership(app: &App, id: Option<&str>, tab: DetailsTab) -> CommandResult {
    let partnership = match id {
        Some(id) => require_partnership(app, id)?,
        None => match app.selected() {
            Some(partnership) => partnership,
            None => {
                println!("{}", render_list(&[], None));
                return Ok(());
            }
        },
    };

    println!("{}", render_details(partnership, tab));
    Ok(())
}

pub async fn create_partnership(app: &mut App, form: PartnershipForm) -> CommandResult {
    if !form.missing_required().is_empty() {
        println!("{}", "➕ New Partnership".blue().bold());
        println!();
    }

    let input = form.prompt()?;
    let outcome = app.dispatch(Intent::CreatePartnership(input)).await?;

    println!();
    print_outcome(app, &outcome);
    Ok(())
}

pub async fn update_partnership(
    app: &mut App,
    id: &str,
    updates: PartnershipUpdateInput,
) -> CommandResult {
    let Some(intent) = update_intent(app, id, updates)? else {
        println!("{}", "Nothing to update".yellow());
        return Ok(());
    };

    let outcome = app.dispatch(intent).await?;

    print_outcome(app, &outcome);
    Ok(())
}

pub async fn delete_partnership(app: &mut App, id: &str, skip_confirmation: bool) -> CommandResult {
    let company_name = require_partnership(app, id)?.company_name.clone();

    let confirmed = if skip_confirmation {
        true
    } else {
        Confirm::new(&format!("Delete partnership with {}?", company_name))
            .with_default(false)
            .prompt()?
    };

    if !confirmed {
        println!("{}", "❌ Operation cancelled".yellow());
        return Ok(());
    }

    let outcome = app
        .dispatch(Intent::DeletePartnership { id: id.to_string() })
        .await?;

    print_outcome(app, &outcome);
    Ok(())
}

pub async fn export_agreement(app: &App, id: &str, dir: PathBuf) -> CommandResult {
    let partnership = require_partnership(app, id)?;
    let path = write_agreement(&dir, partnership).await?;

    println!(
        "{}",
        format!("📥 Agreement written to {}", path.display()).green()
    );
    Ok(())
}
