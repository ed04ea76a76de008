// ABOUTME: Plain-text partnership agreement export
// ABOUTME: Renders one partnership and writes it to the export directory

use crate::display::{format_datetime, or_placeholder};
use lazy_static::lazy_static;
use partnerdesk_core::Partnership;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::info;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("valid whitespace regex");
}

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write agreement: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders the agreement text for one partnership
pub fn render_agreement(partnership: &Partnership) -> String {
    let collaborators: Vec<String> = partnership
        .collaborators
        .iter()
        .map(|c| {
            format!(
                "- {} ({}) - {}",
                c.name,
                c.email,
                or_placeholder(&c.role, "Collaborator")
            )
        })
        .collect();

    let milestones: Vec<String> = partnership
        .milestones
        .iter()
        .map(|m| {
            format!(
                "- {}: {} (Due: {})",
                m.title,
                m.status.as_str(),
                or_placeholder(&m.due_date, "TBD")
            )
        })
        .collect();

    let sections = [
        "ECOSYSTEM PARTNERSHIP AGREEMENT".to_string(),
        String::new(),
        format!("Partnership ID: {}", partnership.id),
        format!("Company: {}", partnership.company_name),
        format!("Contact: {}", partnership.contact_email),
        format!("Industry: {}", partnership.industry),
        format!("Type: {}", partnership.partnership_type.as_str()),
        format!("Status: {}", partnership.status.as_str()),
        String::new(),
        "DESCRIPTION:".to_string(),
        partnership.description.clone(),
        String::new(),
        format!(
            "EXPECTED VALUE: {}",
            or_placeholder(&partnership.expected_value, "TBD")
        ),
        format!("TIMELINE: {}", or_placeholder(&partnership.timeline, "TBD")),
        String::new(),
        format!("COLLABORATORS ({}):", partnership.collaborators.len()),
        collaborators.join("\n"),
        String::new(),
        format!("MILESTONES ({}):", partnership.milestones.len()),
        milestones.join("\n"),
        String::new(),
        format!("Created: {}", format_datetime(&partnership.created_at)),
    ];

    sections.join("\n").trim().to_string()
}

/// `partnership_agreement_<company name, whitespace runs replaced by _>.txt`
pub fn agreement_file_name(partnership: &Partnership) -> String {
    format!(
        "partnership_agreement_{}.txt",
        WHITESPACE_RUN.replace_all(&partnership.company_name, "_")
    )
}

/// Writes the agreement into `dir`, creating it if needed, and returns the file path
pub async fn write_agreement(
    dir: impl AsRef<Path>,
    partnership: &Partnership,
) -> Result<PathBuf, ExportError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).await?;

    let path = dir.join(agreement_file_name(partnership));
    fs::write(&path, render_agreement(partnership)).await?;

    info!(
        "Exported agreement for '{}' to {:?}",
        partnership.company_name, path
    );
    Ok(path)
}
