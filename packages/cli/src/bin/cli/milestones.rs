use super::utils::{print_outcome, CommandResult};
use clap::Subcommand;
use partnerdesk_cli::lookup::{milestone_status_intent, require_partnership};
use partnerdesk_cli::views::MilestoneForm;
use partnerdesk_partnerships::{App, Intent, MilestoneStatus};

#[derive(Subcommand)]
pub enum MilestoneCommands {
    /// Add a milestone to a partnership
    Add {
        /// Partnership ID
        partnership_id: String,
        /// Milestone title
        #[arg(short, long)]
        title: Option<String>,
        /// What the milestone covers
        #[arg(short, long)]
        description: Option<String>,
        /// Due date, e.g. 2024-06-30
        #[arg(long)]
        due: Option<String>,
    },
    /// Change the status of a milestone
    Status {
        /// Partnership ID
        partnership_id: String,
        /// Milestone ID
        milestone_id: String,
        /// New status (pending, in-progress, completed, blocked)
        status: MilestoneStatus,
    },
}

pub async fn handle_milestone_command(command: MilestoneCommands, app: &mut App) -> CommandResult {
    match command {
        MilestoneCommands::Add {
            partnership_id,
            title,
            description,
            due,
        } => {
            let form = MilestoneForm {
                title,
                description,
                due_date: due,
            };
            add_milestone(app, &partnership_id, form).await
        }
        MilestoneCommands::Status {
            partnership_id,
            milestone_id,
            status,
        } => set_milestone_status(app, &partnership_id, &milestone_id, status).await,
    }
}

pub async fn add_milestone(app: &mut App, partnership_id: &str, form: MilestoneForm) -> CommandResult {
    require_partnership(app, partnership_id)?;

    let input = form.prompt()?;
    let outcome = app
        .dispatch(Intent::AddMilestone {
            partnership_id: partnership_id.to_string(),
            input,
        })
        .await?;

    print_outcome(app, &outcome);
    Ok(())
}

pub async fn set_milestone_status(
    app: &mut App,
    partnership_id: &str,
    milestone_id: &str,
    status: MilestoneStatus,
) -> CommandResult {
    let intent = milestone_status_intent(app, partnership_id, milestone_id, status)?;
    let outcome = app.dispatch(intent).await?;

    print_outcome(app, &outcome);
    Ok(())
}
