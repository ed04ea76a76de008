use super::utils::{print_outcome, CommandResult};
use clap::Subcommand;
use partnerdesk_cli::lookup::require_partnership;
use partnerdesk_cli::views::CollaboratorForm;
use partnerdesk_partnerships::{App, Intent};

#[derive(Subcommand)]
pub enum CollaboratorCommands {
    /// Add a collaborator to a partnership
    Add {
        /// Partnership ID
        partnership_id: String,
        /// Collaborator name
        #[arg(short, long)]
        name: Option<String>,
        /// Collaborator email
        #[arg(short, long)]
        email: Option<String>,
        /// Role within the partnership
        #[arg(short, long)]
        role: Option<String>,
    },
}

pub async fn handle_collaborator_command(
    command: CollaboratorCommands,
    app: &mut App,
) -> CommandResult {
    match command {
        CollaboratorCommands::Add {
            partnership_id,
            name,
            email,
            role,
        } => add_collaborator(app, &partnership_id, CollaboratorForm { name, email, role }).await,
    }
}

pub async fn add_collaborator(
    app: &mut App,
    partnership_id: &str,
    form: CollaboratorForm,
) -> CommandResult {
    require_partnership(app, partnership_id)?;

    let input = form.prompt()?;
    let outcome = app
        .dispatch(Intent::AddCollaborator {
            partnership_id: partnership_id.to_string(),
            input,
        })
        .await?;

    print_outcome(app, &outcome);
    Ok(())
}
