// ABOUTME: Core types, traits, and utilities for PartnerDesk
// ABOUTME: Foundational package providing shared functionality across all PartnerDesk packages

pub mod constants;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types
pub use types::{
    Collaborator, CollaboratorCreateInput, Milestone, MilestoneCreateInput, MilestoneStatus,
    ParseEnumError, Partnership, PartnershipCreateInput, PartnershipStatus, PartnershipType,
    PartnershipUpdateInput,
};

// Re-export constants
pub use constants::{partnerdesk_dir, storage_file, DEFAULT_STORAGE_KEY};

// Re-export utilities
pub use utils::{generate_id, generate_unique_id, normalize_optional, present};

// Re-export validation
pub use validation::{
    truncate, validate_collaborator_data, validate_milestone_data, validate_partnership_data,
    validate_partnership_update, ValidationError,
};
