// ABOUTME: Presence validation for partnership, collaborator, and milestone input
// ABOUTME: Every missing field is reported, not just the first

use crate::types::{
    CollaboratorCreateInput, MilestoneCreateInput, PartnershipCreateInput, PartnershipUpdateInput,
};
use std::fmt;

/// Validation error for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates a new partnership: company name, contact email and description are required
pub fn validate_partnership_data(data: &PartnershipCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if is_blank(&data.company_name) {
        errors.push(ValidationError::new("companyName", "Company name is required"));
    }

    if is_blank(&data.contact_email) {
        errors.push(ValidationError::new("contactEmail", "Contact email is required"));
    }

    if is_blank(&data.description) {
        errors.push(ValidationError::new("description", "Description is required"));
    }

    errors
}

/// Validates partnership updates; required fields may change but not be cleared
pub fn validate_partnership_update(data: &PartnershipUpdateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(ref name) = data.company_name {
        if is_blank(name) {
            errors.push(ValidationError::new("companyName", "Company name cannot be empty"));
        }
    }

    if let Some(ref email) = data.contact_email {
        if is_blank(email) {
            errors.push(ValidationError::new("contactEmail", "Contact email cannot be empty"));
        }
    }

    if let Some(ref description) = data.description {
        if is_blank(description) {
            errors.push(ValidationError::new("description", "Description cannot be empty"));
        }
    }

    errors
}

/// Validates a new collaborator: name and email are required
pub fn validate_collaborator_data(data: &CollaboratorCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if is_blank(&data.name) {
        errors.push(ValidationError::new("name", "Collaborator name is required"));
    }

    if is_blank(&data.email) {
        errors.push(ValidationError::new("email", "Collaborator email is required"));
    }

    errors
}

/// Validates a new milestone: title is required
pub fn validate_milestone_data(data: &MilestoneCreateInput) -> Vec<ValidationError> {
    if is_blank(&data.title) {
        vec![ValidationError::new("title", "Milestone title is required")]
    } else {
        Vec::new()
    }
}

/// Truncates a string to a maximum number of characters with ellipsis
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
