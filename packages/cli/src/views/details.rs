use super::{milestone_badge, status_badge};
use clap::ValueEnum;
use colored::*;
use partnerdesk_core::Partnership;
use partnerdesk_formatter::{format_date, format_datetime, or_placeholder, type_caption};
use std::fmt::{self, Write};

const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DetailsTab {
    #[default]
    Overview,
    Collaborators,
    Milestones,
}

impl DetailsTab {
    pub const ALL: [DetailsTab; 3] = [
        DetailsTab::Overview,
        DetailsTab::Collaborators,
        DetailsTab::Milestones,
    ];

    /// Tab caption, with child counts for the list tabs
    pub fn caption(&self, partnership: &Partnership) -> String {
        match self {
            DetailsTab::Overview => "Overview".to_string(),
            DetailsTab::Collaborators => {
                format!("Collaborators ({})", partnership.collaborators.len())
            }
            DetailsTab::Milestones => format!("Milestones ({})", partnership.milestones.len()),
        }
    }
}

impl fmt::Display for DetailsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailsTab::Overview => write!(f, "Overview"),
            DetailsTab::Collaborators => write!(f, "Collaborators"),
            DetailsTab::Milestones => write!(f, "Milestones"),
        }
    }
}

/// Header, tab bar, and the content of `tab` for one partnership
pub fn render_details(partnership: &Partnership, tab: DetailsTab) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    write_details(&mut out, partnership, tab).ok();
    out.trim_end().to_string()
}

fn write_details(out: &mut String, partnership: &Partnership, tab: DetailsTab) -> fmt::Result {
    writeln!(out, "{}", partnership.company_name.blue().bold())?;
    writeln!(
        out,
        "{}",
        type_caption(partnership.partnership_type).dimmed()
    )?;
    writeln!(out, "{:<10} {}", "Status:".cyan(), status_badge(partnership.status))?;
    writeln!(out, "{:<10} {}", "ID:".cyan(), partnership.id)?;
    writeln!(out)?;
    writeln!(out, "{}", render_tab_bar(partnership, tab))?;
    writeln!(out)?;

    match tab {
        DetailsTab::Overview => write_overview(out, partnership),
        DetailsTab::Collaborators => write_collaborators(out, partnership),
        DetailsTab::Milestones => write_milestones(out, partnership),
    }
}

fn render_tab_bar(partnership: &Partnership, active: DetailsTab) -> String {
    DetailsTab::ALL
        .iter()
        .map(|tab| {
            let caption = tab.caption(partnership);
            if *tab == active {
                format!("[{}]", caption).bold().to_string()
            } else {
                format!(" {} ", caption).dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn write_overview(out: &mut String, partnership: &Partnership) -> fmt::Result {
    let industry = if partnership.industry.trim().is_empty() {
        NOT_SPECIFIED
    } else {
        partnership.industry.as_str()
    };

    writeln!(out, "{}", "📧 Contact Information".bold())?;
    writeln!(out, "  Email: {}", partnership.contact_email)?;
    writeln!(out, "  Industry: {}", industry)?;
    writeln!(out)?;
    writeln!(out, "{}", "📝 Description".bold())?;
    writeln!(out, "  {}", partnership.description)?;
    writeln!(out)?;
    writeln!(out, "{}", "📊 Partnership Details".bold())?;
    writeln!(
        out,
        "  Expected Value: {}",
        or_placeholder(&partnership.expected_value, NOT_SPECIFIED)
    )?;
    writeln!(
        out,
        "  Timeline: {}",
        or_placeholder(&partnership.timeline, NOT_SPECIFIED)
    )?;
    writeln!(
        out,
        "  Created: {}",
        format_datetime(&partnership.created_at)
    )?;
    writeln!(out)?;
    writeln!(out, "{}", "💾 Generate Agreement".bold())?;
    writeln!(
        out,
        "  {}",
        format!("Run 'partnerdesk export {}' to write the agreement", partnership.id).dimmed()
    )
}

fn write_collaborators(out: &mut String, partnership: &Partnership) -> fmt::Result {
    writeln!(out, "{}", "👥 Collaborators".bold())?;

    if partnership.collaborators.is_empty() {
        return writeln!(out, "  No collaborators yet. Add one to get started!");
    }

    for collaborator in &partnership.collaborators {
        writeln!(out)?;
        writeln!(out, "  {} {}", collaborator.name.bold(), format!("({})", collaborator.id).dimmed())?;
        writeln!(out, "  {}", collaborator.email)?;
        if let Some(role) = collaborator.role.as_deref().filter(|r| !r.trim().is_empty()) {
            writeln!(out, "  {}", role.italic())?;
        }
        writeln!(out, "  Joined: {}", format_date(&collaborator.joined_at))?;
    }
    Ok(())
}

fn write_milestones(out: &mut String, partnership: &Partnership) -> fmt::Result {
    writeln!(out, "{}", "🎯 Milestones".bold())?;

    if partnership.milestones.is_empty() {
        return writeln!(out, "  No milestones yet. Add one to track progress!");
    }

    for milestone in &partnership.milestones {
        writeln!(out)?;
        writeln!(
            out,
            "  {} [{}] {}",
            milestone.title.bold(),
            milestone_badge(milestone.status),
            format!("({})", milestone.id).dimmed()
        )?;
        if let Some(description) = milestone.description.as_deref().filter(|d| !d.trim().is_empty()) {
            writeln!(out, "  {}", description)?;
        }
        writeln!(
            out,
            "  Due: {}  Created: {}",
            or_placeholder(&milestone.due_date, "Not set"),
            format_date(&milestone.created_at)
        )?;
    }
    Ok(())
}
