// ABOUTME: Input forms for partnerships, collaborators, and milestones
// ABOUTME: Values given as flags are used as-is; missing ones are prompted with inquire

use inquire::{InquireError, Select, Text};
use partnerdesk_core::{
    normalize_optional, CollaboratorCreateInput, MilestoneCreateInput, PartnershipCreateInput,
    PartnershipType,
};

type FormResult<T> = Result<T, InquireError>;

fn prompt_required(label: &str, placeholder: &str) -> FormResult<String> {
    Text::new(label)
        .with_placeholder(placeholder)
        .with_validator(inquire::required!("This field is required"))
        .prompt()
}

fn prompt_optional(label: &str, placeholder: &str) -> FormResult<Option<String>> {
    let value = Text::new(label).with_placeholder(placeholder).prompt()?;
    Ok(normalize_optional(Some(value)))
}

/// Fields of the partnership creation form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartnershipForm {
    pub company_name: Option<String>,
    pub contact_email: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub partnership_type: Option<PartnershipType>,
    pub expected_value: Option<String>,
    pub timeline: Option<String>,
}

impl PartnershipForm {
    /// Labels of required fields that have no value yet
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.company_name) {
            missing.push("Company Name");
        }
        if is_blank(&self.contact_email) {
            missing.push("Contact Email");
        }
        if is_blank(&self.description) {
            missing.push("Description");
        }
        missing
    }

    /// Converts the collected values without prompting; blank required fields stay blank
    pub fn into_input(self) -> PartnershipCreateInput {
        PartnershipCreateInput {
            company_name: self.company_name.unwrap_or_default(),
            contact_email: self.contact_email.unwrap_or_default(),
            industry: normalize_optional(self.industry),
            description: self.description.unwrap_or_default(),
            partnership_type: self.partnership_type,
            expected_value: normalize_optional(self.expected_value),
            timeline: normalize_optional(self.timeline),
        }
    }

    /// Prompts for whatever is missing. Optional fields are only asked for
    /// when at least one required field was missing too.
    pub fn prompt(mut self) -> FormResult<PartnershipCreateInput> {
        if self.missing_required().is_empty() {
            return Ok(self.into_input());
        }

        if is_blank(&self.company_name) {
            self.company_name = Some(prompt_required("Company Name *", "Enter company name")?);
        }
        if is_blank(&self.contact_email) {
            self.contact_email = Some(prompt_required("Contact Email *", "partner@company.com")?);
        }
        if self.industry.is_none() {
            self.industry = prompt_optional("Industry", "e.g., Technology, Healthcare, Finance")?;
        }
        if self.partnership_type.is_none() {
            let selected =
                Select::new("Partnership Type", PartnershipType::ALL.to_vec()).prompt()?;
            self.partnership_type = Some(selected);
        }
        if is_blank(&self.description) {
            self.description = Some(prompt_required(
                "Description *",
                "Describe the partnership opportunity, goals, and expected outcomes...",
            )?);
        }
        if self.expected_value.is_none() {
            self.expected_value = prompt_optional("Expected Value", "e.g., $100K, 10% growth")?;
        }
        if self.timeline.is_none() {
            self.timeline = prompt_optional("Timeline", "e.g., 6 months, Q1 2024")?;
        }

        Ok(self.into_input())
    }
}

/// Fields of the add-collaborator form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollaboratorForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl CollaboratorForm {
    pub fn into_input(self) -> CollaboratorCreateInput {
        CollaboratorCreateInput {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            role: normalize_optional(self.role),
        }
    }

    pub fn prompt(mut self) -> FormResult<CollaboratorCreateInput> {
        if !is_blank(&self.name) && !is_blank(&self.email) {
            return Ok(self.into_input());
        }

        if is_blank(&self.name) {
            self.name = Some(prompt_required("Name *", "Full name")?);
        }
        if is_blank(&self.email) {
            self.email = Some(prompt_required("Email *", "name@company.com")?);
        }
        if self.role.is_none() {
            self.role = prompt_optional("Role (optional)", "e.g., Account Manager")?;
        }

        Ok(self.into_input())
    }
}

/// Fields of the add-milestone form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MilestoneForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

impl MilestoneForm {
    pub fn into_input(self) -> MilestoneCreateInput {
        MilestoneCreateInput {
            title: self.title.unwrap_or_default(),
            description: normalize_optional(self.description),
            due_date: normalize_optional(self.due_date),
        }
    }

    pub fn prompt(mut self) -> FormResult<MilestoneCreateInput> {
        if !is_blank(&self.title) {
            return Ok(self.into_input());
        }

        self.title = Some(prompt_required("Title *", "Milestone title")?);
        if self.description.is_none() {
            self.description = prompt_optional("Description", "What needs to happen")?;
        }
        if self.due_date.is_none() {
            self.due_date = prompt_optional("Due date", "YYYY-MM-DD")?;
        }

        Ok(self.into_input())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}
