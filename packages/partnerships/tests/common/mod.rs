// ABOUTME: Shared helpers for partnership integration tests
// ABOUTME: In-memory app construction and canned inputs

#![allow(dead_code)]

use partnerdesk_partnerships::{App, CollaboratorCreateInput, MilestoneCreateInput, PartnershipCreateInput};
use partnerdesk_storage::{MemoryStorage, PersistenceAdapter, PersistencePolicy};
use std::sync::Arc;

pub const KEY: &str = "partnerships";

/// Starts an app on fresh in-memory storage, returning the storage for inspection
pub async fn memory_app() -> (App, Arc<MemoryStorage>) {
    memory_app_with_policy(PersistencePolicy::SkipEmpty).await
}

pub async fn memory_app_with_policy(policy: PersistencePolicy) -> (App, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let app = restart(&storage, policy).await;
    (app, storage)
}

/// Starts a new app session on existing storage
pub async fn restart(storage: &Arc<MemoryStorage>, policy: PersistencePolicy) -> App {
    let adapter = PersistenceAdapter::new(storage.clone(), KEY)
        .unwrap()
        .with_policy(policy);
    App::start(adapter).await
}

pub fn partnership_input(company: &str) -> PartnershipCreateInput {
    PartnershipCreateInput {
        company_name: company.to_string(),
        contact_email: format!("contact@{}.com", company.to_lowercase()),
        description: format!("{} pilot", company),
        ..Default::default()
    }
}

pub fn collaborator_input(name: &str) -> CollaboratorCreateInput {
    CollaboratorCreateInput {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: None,
    }
}

pub fn milestone_input(title: &str) -> MilestoneCreateInput {
    MilestoneCreateInput {
        title: title.to_string(),
        description: None,
        due_date: None,
    }
}
