// ABOUTME: Resolves ids typed on the command line against the loaded collection
// ABOUTME: Unknown ids become user-facing errors instead of silent no-ops

use partnerdesk_partnerships::{
    App, Intent, Milestone, MilestoneStatus, Partnership, PartnershipUpdateInput,
};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("Partnership with ID '{0}' not found")]
    PartnershipNotFound(String),
    #[error("Milestone with ID '{0}' not found")]
    MilestoneNotFound(String),
}

pub fn require_partnership<'a>(app: &'a App, id: &str) -> Result<&'a Partnership, LookupError> {
    app.store().get(id).ok_or_else(|| {
        debug!("No partnership with id {}", id);
        LookupError::PartnershipNotFound(id.to_string())
    })
}

pub fn require_milestone<'a>(
    partnership: &'a Partnership,
    milestone_id: &str,
) -> Result<&'a Milestone, LookupError> {
    partnership.milestone(milestone_id).ok_or_else(|| {
        debug!(
            "No milestone with id {} in partnership {}",
            milestone_id, partnership.id
        );
        LookupError::MilestoneNotFound(milestone_id.to_string())
    })
}

/// The update intent for `id`, or `None` when `updates` would change nothing
pub fn update_intent(
    app: &App,
    id: &str,
    updates: PartnershipUpdateInput,
) -> Result<Option<Intent>, LookupError> {
    require_partnership(app, id)?;

    if updates.is_empty() {
        return Ok(None);
    }

    Ok(Some(Intent::UpdatePartnership {
        id: id.to_string(),
        updates,
    }))
}

pub fn milestone_status_intent(
    app: &App,
    partnership_id: &str,
    milestone_id: &str,
    status: MilestoneStatus,
) -> Result<Intent, LookupError> {
    let partnership = require_partnership(app, partnership_id)?;
    require_milestone(partnership, milestone_id)?;

    Ok(Intent::UpdateMilestoneStatus {
        partnership_id: partnership_id.to_string(),
        milestone_id: milestone_id.to_string(),
        status,
    })
}
