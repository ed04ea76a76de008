// ABOUTME: Text views for partnerships: summary list, detail tabs, and input forms
// ABOUTME: Renderers return strings so commands and interactive mode share them

pub mod details;
pub mod form;
pub mod list;

pub use details::{render_details, DetailsTab};
pub use form::{CollaboratorForm, MilestoneForm, PartnershipForm};
pub use list::render_list;

use colored::{Color, ColoredString, Colorize};
use partnerdesk_core::{MilestoneStatus, PartnershipStatus};

pub fn status_color(status: PartnershipStatus) -> Color {
    match status {
        PartnershipStatus::Active => Color::Green,
        PartnershipStatus::Pending => Color::Yellow,
        PartnershipStatus::Completed => Color::Blue,
        PartnershipStatus::Cancelled => Color::Red,
    }
}

pub fn milestone_status_color(status: MilestoneStatus) -> Color {
    match status {
        MilestoneStatus::Pending => Color::Yellow,
        MilestoneStatus::InProgress => Color::Blue,
        MilestoneStatus::Completed => Color::Green,
        MilestoneStatus::Blocked => Color::Red,
    }
}

/// Capitalized status badge, e.g. `Active` in green
pub fn status_badge(status: PartnershipStatus) -> ColoredString {
    status.to_string().color(status_color(status))
}

pub fn milestone_badge(status: MilestoneStatus) -> ColoredString {
    status.to_string().color(milestone_status_color(status))
}
