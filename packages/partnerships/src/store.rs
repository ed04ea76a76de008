use chrono::Utc;
use partnerdesk_core::{
    generate_unique_id, normalize_optional, validate_collaborator_data, validate_milestone_data,
    validate_partnership_data, validate_partnership_update, Collaborator, CollaboratorCreateInput,
    Milestone, MilestoneCreateInput, MilestoneStatus, Partnership, PartnershipCreateInput,
    PartnershipStatus, PartnershipUpdateInput, ValidationError,
};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{}", ValidationSummary(.0))]
    Validation(Vec<ValidationError>),
}

struct ValidationSummary<'a>(&'a [ValidationError]);

impl fmt::Display for ValidationSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "Please fill in all required fields: {}", messages.join(", "))
    }
}

impl StoreError {
    /// Fields that failed validation, in report order
    pub fn fields(&self) -> Vec<&str> {
        match self {
            StoreError::Validation(errors) => errors.iter().map(|e| e.field.as_str()).collect(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

fn check(errors: Vec<ValidationError>) -> StoreResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Validation(errors))
    }
}

/// Ordered collection of partnerships. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartnershipStore {
    partnerships: Vec<Partnership>,
}

impl PartnershipStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_partnerships(partnerships: Vec<Partnership>) -> Self {
        Self { partnerships }
    }

    pub fn partnerships(&self) -> &[Partnership] {
        &self.partnerships
    }

    pub fn get(&self, id: &str) -> Option<&Partnership> {
        self.partnerships.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn first(&self) -> Option<&Partnership> {
        self.partnerships.first()
    }

    pub fn len(&self) -> usize {
        self.partnerships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partnerships.is_empty()
    }

    /// Creates a pending partnership with empty sub-collections and appends it
    pub fn create_partnership(&mut self, data: PartnershipCreateInput) -> StoreResult<Partnership> {
        check(validate_partnership_data(&data))?;

        let id = generate_unique_id(self.partnerships.iter().map(|p| p.id.as_str()));
        let partnership = Partnership {
            id,
            company_name: data.company_name.trim().to_string(),
            contact_email: data.contact_email.trim().to_string(),
            industry: data.industry.map(|i| i.trim().to_string()).unwrap_or_default(),
            description: data.description.trim().to_string(),
            partnership_type: data.partnership_type.unwrap_or_default(),
            expected_value: normalize_optional(data.expected_value),
            timeline: normalize_optional(data.timeline),
            status: PartnershipStatus::Pending,
            created_at: Utc::now(),
            collaborators: Vec::new(),
            milestones: Vec::new(),
            documents: Vec::new(),
        };

        self.partnerships.push(partnership.clone());
        info!(
            "Created partnership '{}' with ID {}",
            partnership.company_name, partnership.id
        );
        Ok(partnership)
    }

    /// Merges `updates` into the matching record. Returns `false` when the id is unknown.
    pub fn update_partnership(&mut self, id: &str, updates: PartnershipUpdateInput) -> StoreResult<bool> {
        check(validate_partnership_update(&updates))?;

        let Some(index) = self.partnerships.iter().position(|p| p.id == id) else {
            debug!("Ignoring update for unknown partnership {}", id);
            return Ok(false);
        };

        let mut updated = self.partnerships[index].clone();
        if let Some(company_name) = updates.company_name {
            updated.company_name = company_name.trim().to_string();
        }
        if let Some(contact_email) = updates.contact_email {
            updated.contact_email = contact_email.trim().to_string();
        }
        if let Some(industry) = updates.industry {
            updated.industry = industry.trim().to_string();
        }
        if let Some(description) = updates.description {
            updated.description = description.trim().to_string();
        }
        if let Some(partnership_type) = updates.partnership_type {
            updated.partnership_type = partnership_type;
        }
        if updates.expected_value.is_some() {
            updated.expected_value = normalize_optional(updates.expected_value);
        }
        if updates.timeline.is_some() {
            updated.timeline = normalize_optional(updates.timeline);
        }
        if let Some(status) = updates.status {
            updated.status = status;
        }
        if let Some(collaborators) = updates.collaborators {
            updated.collaborators = collaborators;
        }
        if let Some(milestones) = updates.milestones {
            updated.milestones = milestones;
        }

        info!("Updated partnership '{}' (ID: {})", updated.company_name, updated.id);
        self.partnerships[index] = updated;
        Ok(true)
    }

    /// Removes the matching record. Returns `false` when the id is unknown.
    pub fn delete_partnership(&mut self, id: &str) -> bool {
        let Some(index) = self.partnerships.iter().position(|p| p.id == id) else {
            debug!("Ignoring delete for unknown partnership {}", id);
            return false;
        };

        let removed = self.partnerships.remove(index);
        info!("Deleted partnership '{}' (ID: {})", removed.company_name, removed.id);
        true
    }

    /// Appends a collaborator. Returns `None` when the partnership is unknown.
    pub fn add_collaborator(
        &mut self,
        partnership_id: &str,
        data: CollaboratorCreateInput,
    ) -> StoreResult<Option<Collaborator>> {
        check(validate_collaborator_data(&data))?;

        let Some(partnership) = self.get(partnership_id) else {
            debug!("Ignoring collaborator for unknown partnership {}", partnership_id);
            return Ok(None);
        };

        let collaborator = Collaborator {
            id: generate_unique_id(partnership.collaborators.iter().map(|c| c.id.as_str())),
            name: data.name.trim().to_string(),
            email: data.email.trim().to_string(),
            role: normalize_optional(data.role),
            joined_at: Utc::now(),
        };

        let mut collaborators = partnership.collaborators.clone();
        collaborators.push(collaborator.clone());
        self.update_partnership(
            partnership_id,
            PartnershipUpdateInput {
                collaborators: Some(collaborators),
                ..Default::default()
            },
        )?;

        Ok(Some(collaborator))
    }

    /// Appends a pending milestone. Returns `None` when the partnership is unknown.
    pub fn add_milestone(
        &mut self,
        partnership_id: &str,
        data: MilestoneCreateInput,
    ) -> StoreResult<Option<Milestone>> {
        check(validate_milestone_data(&data))?;

        let Some(partnership) = self.get(partnership_id) else {
            debug!("Ignoring milestone for unknown partnership {}", partnership_id);
            return Ok(None);
        };

        let milestone = Milestone {
            id: generate_unique_id(partnership.milestones.iter().map(|m| m.id.as_str())),
            title: data.title.trim().to_string(),
            description: normalize_optional(data.description),
            due_date: normalize_optional(data.due_date),
            status: MilestoneStatus::Pending,
            created_at: Utc::now(),
        };

        let mut milestones = partnership.milestones.clone();
        milestones.push(milestone.clone());
        self.update_partnership(
            partnership_id,
            PartnershipUpdateInput {
                milestones: Some(milestones),
                ..Default::default()
            },
        )?;

        Ok(Some(milestone))
    }

    /// Replaces one milestone's status. Returns `false` when either id is unknown.
    pub fn update_milestone_status(
        &mut self,
        partnership_id: &str,
        milestone_id: &str,
        status: MilestoneStatus,
    ) -> bool {
        let Some(partnership) = self.get(partnership_id) else {
            return false;
        };
        if partnership.milestone(milestone_id).is_none() {
            debug!(
                "Ignoring status change for unknown milestone {} of {}",
                milestone_id, partnership_id
            );
            return false;
        }

        let milestones: Vec<Milestone> = partnership
            .milestones
            .iter()
            .map(|m| {
                if m.id == milestone_id {
                    Milestone {
                        status,
                        ..m.clone()
                    }
                } else {
                    m.clone()
                }
            })
            .collect();

        // Only the milestone list changes, which carries no validation rules
        matches!(
            self.update_partnership(
                partnership_id,
                PartnershipUpdateInput {
                    milestones: Some(milestones),
                    ..Default::default()
                },
            ),
            Ok(true)
        )
    }
}
