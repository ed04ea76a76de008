// ABOUTME: Menu-driven session over one loaded collection
// ABOUTME: Shows the list and selected details, then dispatches the chosen action

use super::collaborators::add_collaborator;
use super::milestones::{add_milestone, set_milestone_status};
use super::partnerships::{delete_partnership, export_agreement, update_partnership};
use super::utils::{print_outcome, CommandResult};
use colored::*;
use inquire::{InquireError, Select};
use partnerdesk_cli::config::Config;
use partnerdesk_cli::views::{
    render_details, render_list, CollaboratorForm, DetailsTab, MilestoneForm, PartnershipForm,
};
use partnerdesk_partnerships::{
    App, Intent, MilestoneStatus, Outcome, PartnershipStatus, PartnershipUpdateInput,
};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Select,
    SwitchTab,
    ChangeStatus,
    AddCollaborator,
    AddMilestone,
    UpdateMilestoneStatus,
    Export,
    Delete,
    New,
    Quit,
}

impl Action {
    const ALL: [Action; 10] = [
        Action::Select,
        Action::SwitchTab,
        Action::ChangeStatus,
        Action::AddCollaborator,
        Action::AddMilestone,
        Action::UpdateMilestoneStatus,
        Action::Export,
        Action::Delete,
        Action::New,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Select => "Select another partnership",
            Action::SwitchTab => "Switch tab",
            Action::ChangeStatus => "Change status",
            Action::AddCollaborator => "+ Add collaborator",
            Action::AddMilestone => "+ Add milestone",
            Action::UpdateMilestoneStatus => "Update milestone status",
            Action::Export => "📥 Export agreement",
            Action::Delete => "🗑️  Delete partnership",
            Action::New => "+ New partnership",
            Action::Quit => "Quit",
        };
        write!(f, "{}", label)
    }
}

/// A selectable record shown by its label, returned by its id
struct Choice {
    id: String,
    label: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

enum Flow {
    Continue,
    Quit,
}

pub async fn run_interactive(app: &mut App, config: &Config) -> CommandResult {
    let mut tab = DetailsTab::Overview;

    loop {
        let step = if app.is_composing() {
            compose(app).await
        } else {
            browse(app, config, &mut tab).await
        };

        match step {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(()),
            Err(e) if is_interrupted(e.as_ref()) => return Ok(()),
            Err(e) if is_cancelled(e.as_ref()) => {}
            Err(e) => eprintln!("{}", format!("❌ {}", e).red()),
        }
    }
}

async fn compose(app: &mut App) -> Result<Flow, Box<dyn Error>> {
    println!();
    println!("{}", "➕ New Partnership".blue().bold());
    println!("{}", "Press Esc to cancel".dimmed());

    match PartnershipForm::default().prompt() {
        Ok(input) => {
            let outcome = app.dispatch(Intent::CreatePartnership(input)).await?;
            print_outcome(app, &outcome);
            Ok(Flow::Continue)
        }
        Err(InquireError::OperationCanceled) => {
            // Ignored when there is nothing to go back to, which ends the session
            match app.dispatch(Intent::CancelCompose).await? {
                Outcome::Ignored => Ok(Flow::Quit),
                _ => Ok(Flow::Continue),
            }
        }
        Err(e) => Err(e.into()),
    }
}

async fn browse(
    app: &mut App,
    config: &Config,
    tab: &mut DetailsTab,
) -> Result<Flow, Box<dyn Error>> {
    let Some(selected) = app.selected() else {
        app.dispatch(Intent::ComposeNew).await?;
        return Ok(Flow::Continue);
    };
    let selected_id = selected.id.clone();

    println!();
    println!("{}", render_list(app.partnerships(), Some(&selected_id)));
    println!();
    println!("{}", render_details(selected, *tab));
    println!();

    let action = match Select::new("What would you like to do?", Action::ALL.to_vec()).prompt() {
        Ok(action) => action,
        Err(InquireError::OperationCanceled) => Action::Quit,
        Err(e) => return Err(e.into()),
    };

    match action {
        Action::Select => {
            let choices = app
                .partnerships()
                .iter()
                .map(|p| Choice {
                    id: p.id.clone(),
                    label: format!("{} ({})", p.company_name, p.status),
                })
                .collect();
            let choice = Select::new("Partnership:", choices).prompt()?;
            app.dispatch(Intent::Select { id: choice.id }).await?;
        }
        Action::SwitchTab => {
            *tab = Select::new("Tab:", DetailsTab::ALL.to_vec()).prompt()?;
        }
        Action::ChangeStatus => {
            let status = Select::new("Status:", PartnershipStatus::ALL.to_vec()).prompt()?;
            update_partnership(app, &selected_id, PartnershipUpdateInput::status(status)).await?;
        }
        Action::AddCollaborator => {
            add_collaborator(app, &selected_id, CollaboratorForm::default()).await?;
            *tab = DetailsTab::Collaborators;
        }
        Action::AddMilestone => {
            add_milestone(app, &selected_id, MilestoneForm::default()).await?;
            *tab = DetailsTab::Milestones;
        }
        Action::UpdateMilestoneStatus => {
            let choices: Vec<Choice> = selected_milestones(app, &selected_id);
            if choices.is_empty() {
                println!("{}", "No milestones yet. Add one to track progress!".yellow());
                return Ok(Flow::Continue);
            }
            let choice = Select::new("Milestone:", choices).prompt()?;
            let status = Select::new("Status:", MilestoneStatus::ALL.to_vec()).prompt()?;
            set_milestone_status(app, &selected_id, &choice.id, status).await?;
            *tab = DetailsTab::Milestones;
        }
        Action::Export => {
            export_agreement(app, &selected_id, config.export_dir.clone()).await?;
        }
        Action::Delete => {
            delete_partnership(app, &selected_id, false).await?;
            *tab = DetailsTab::Overview;
        }
        Action::New => {
            app.dispatch(Intent::ComposeNew).await?;
        }
        Action::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn selected_milestones(app: &App, partnership_id: &str) -> Vec<Choice> {
    app.store()
        .get(partnership_id)
        .map(|p| {
            p.milestones
                .iter()
                .map(|m| Choice {
                    id: m.id.clone(),
                    label: format!("{} [{}]", m.title, m.status),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn is_interrupted(e: &(dyn Error + 'static)) -> bool {
    matches!(
        e.downcast_ref::<InquireError>(),
        Some(InquireError::OperationInterrupted)
    )
}

fn is_cancelled(e: &(dyn Error + 'static)) -> bool {
    matches!(
        e.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled)
    )
}
