// ABOUTME: Shared helpers for command handlers
// ABOUTME: Success messages for dispatched intents

use colored::*;
use partnerdesk_partnerships::{App, Outcome};
use std::error::Error;

pub type CommandResult = Result<(), Box<dyn Error>>;

/// Prints a confirmation line for an outcome that changed the collection
pub fn print_outcome(app: &App, outcome: &Outcome) {
    match outcome {
        Outcome::Created(partnership) => {
            println!(
                "{}",
                format!(
                    "✅ Partnership with '{}' created successfully!",
                    partnership.company_name
                )
                .green()
            );
            println!("ID: {}", partnership.id.cyan());
        }
        Outcome::Updated { id } => {
            let name = company_name(app, id);
            println!("{}", format!("✅ Partnership '{}' updated", name).green());
        }
        Outcome::Deleted { .. } => {
            println!("{}", "✅ Partnership deleted".green());
        }
        Outcome::CollaboratorAdded { collaborator, .. } => {
            println!(
                "{}",
                format!("✅ Collaborator '{}' added", collaborator.name).green()
            );
            println!("ID: {}", collaborator.id.cyan());
        }
        Outcome::MilestoneAdded { milestone, .. } => {
            println!(
                "{}",
                format!("✅ Milestone '{}' added", milestone.title).green()
            );
            println!("ID: {}", milestone.id.cyan());
        }
        Outcome::MilestoneStatusChanged { status, .. } => {
            println!(
                "{}",
                format!("✅ Milestone status set to {}", status).green()
            );
        }
        Outcome::ViewChanged => {}
        Outcome::Ignored => {
            println!("{}", "Nothing changed".yellow());
        }
    }
}

fn company_name<'a>(app: &'a App, id: &'a str) -> &'a str {
    app.store()
        .get(id)
        .map(|p| p.company_name.as_str())
        .unwrap_or(id)
}
