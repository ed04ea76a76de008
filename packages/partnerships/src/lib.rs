// ABOUTME: Partnership management library for PartnerDesk
// ABOUTME: Store operations, selection rules, and the intent-driven application context

pub mod app;
pub mod selection;
pub mod store;

pub use app::{App, AppError, AppResult, Intent, Outcome};
pub use selection::Selection;
pub use store::{PartnershipStore, StoreError, StoreResult};

// Re-export core types for convenience
pub use partnerdesk_core::{
    Collaborator, CollaboratorCreateInput, Milestone, MilestoneCreateInput, MilestoneStatus,
    Partnership, PartnershipCreateInput, PartnershipStatus, PartnershipType,
    PartnershipUpdateInput,
};
