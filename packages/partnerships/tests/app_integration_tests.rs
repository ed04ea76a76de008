// ABOUTME: Integration tests for the application context
// ABOUTME: Covers create/update/delete flows, selection rules, and persistence behavior

mod common;

use async_trait::async_trait;
use common::*;
use partnerdesk_partnerships::{
    App, AppError, Intent, MilestoneStatus, Outcome, PartnershipCreateInput, PartnershipStatus,
    PartnershipUpdateInput,
};
use partnerdesk_storage::{
    KeyValueStorage, MemoryStorage, PersistenceAdapter, PersistencePolicy, StorageError,
    StorageResult,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

async fn create(app: &mut App, company: &str) -> String {
    match app
        .dispatch(Intent::CreatePartnership(partnership_input(company)))
        .await
        .unwrap()
    {
        Outcome::Created(partnership) => partnership.id,
        other => panic!("Expected Created, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_start_enters_composing_mode() {
    let (app, _) = memory_app().await;
    assert!(app.partnerships().is_empty());
    assert!(app.selected().is_none());
    assert!(app.is_composing());
}

#[tokio::test]
async fn test_create_selects_new_record_and_persists() {
    let (mut app, storage) = memory_app().await;

    let first = create(&mut app, "Acme").await;
    app.dispatch(Intent::ComposeNew).await.unwrap();
    let second = create(&mut app, "Globex").await;

    assert_ne!(first, second);
    let selected = app.selected().unwrap();
    assert_eq!(selected.id, second);
    assert_eq!(selected.status, PartnershipStatus::Pending);
    assert!(selected.collaborators.is_empty());
    assert!(selected.milestones.is_empty());
    assert!(!app.is_composing());

    let stored = storage.get_item(KEY).await.unwrap().unwrap();
    assert!(stored.contains("Globex"));
}

#[rstest]
#[case::company("companyName")]
#[case::email("contactEmail")]
#[case::description("description")]
#[tokio::test]
async fn test_create_missing_required_field_is_rejected(#[case] field: &str) {
    let (mut app, storage) = memory_app().await;
    create(&mut app, "Acme").await;
    let before = app.partnerships().to_vec();

    let mut input = partnership_input("Globex");
    match field {
        "companyName" => input.company_name.clear(),
        "contactEmail" => input.contact_email.clear(),
        _ => input.description.clear(),
    }

    let result = app.dispatch(Intent::CreatePartnership(input)).await;
    match result {
        Err(AppError::Store(err)) => assert_eq!(err.fields(), vec![field]),
        other => panic!("Expected validation error, got {:?}", other),
    }

    assert_eq!(app.partnerships(), before.as_slice());
    let stored = storage.get_item(KEY).await.unwrap().unwrap();
    assert!(!stored.contains("Globex"));
}

#[tokio::test]
async fn test_update_refreshes_selected_record() {
    let (mut app, _) = memory_app().await;
    let id = create(&mut app, "Acme").await;

    let outcome = app
        .dispatch(Intent::UpdatePartnership {
            id: id.clone(),
            updates: PartnershipUpdateInput::status(PartnershipStatus::Active),
        })
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Updated { id });
    assert_eq!(app.selected().unwrap().status, PartnershipStatus::Active);
}

#[tokio::test]
async fn test_unknown_ids_are_ignored_without_writing() {
    let (mut app, storage) = memory_app().await;

    let intents = vec![
        Intent::UpdatePartnership {
            id: "missing".to_string(),
            updates: PartnershipUpdateInput::status(PartnershipStatus::Cancelled),
        },
        Intent::DeletePartnership {
            id: "missing".to_string(),
        },
        Intent::AddCollaborator {
            partnership_id: "missing".to_string(),
            input: collaborator_input("Jo"),
        },
        Intent::AddMilestone {
            partnership_id: "missing".to_string(),
            input: milestone_input("Kickoff"),
        },
        Intent::UpdateMilestoneStatus {
            partnership_id: "missing".to_string(),
            milestone_id: "m".to_string(),
            status: MilestoneStatus::Completed,
        },
        Intent::Select {
            id: "missing".to_string(),
        },
    ];

    for intent in intents {
        assert_eq!(app.dispatch(intent).await.unwrap(), Outcome::Ignored);
    }
    assert!(storage.is_empty().await);
}

#[tokio::test]
async fn test_deleting_only_record_enters_composing_mode() {
    let (mut app, _) = memory_app().await;
    let id = create(&mut app, "Acme").await;

    app.dispatch(Intent::DeletePartnership { id }).await.unwrap();

    assert!(app.selected().is_none());
    assert!(app.is_composing());
}

#[tokio::test]
async fn test_deleting_selected_record_selects_first_remaining() {
    let (mut app, _) = memory_app().await;
    let a = create(&mut app, "A").await;
    let _b = create(&mut app, "B").await;
    let c = create(&mut app, "C").await;

    app.dispatch(Intent::DeletePartnership { id: c }).await.unwrap();

    assert_eq!(app.selected().unwrap().id, a);
    assert!(!app.is_composing());
}

#[tokio::test]
async fn test_deleting_unselected_record_keeps_selection() {
    let (mut app, _) = memory_app().await;
    let a = create(&mut app, "A").await;
    let b = create(&mut app, "B").await;

    app.dispatch(Intent::DeletePartnership { id: a }).await.unwrap();

    assert_eq!(app.selection().selected_id(), Some(b.as_str()));
    assert!(!app.is_composing());
}

#[tokio::test]
async fn test_child_ids_stay_unique() {
    let (mut app, _) = memory_app().await;
    let id = create(&mut app, "Acme").await;

    for i in 0..40 {
        app.dispatch(Intent::AddCollaborator {
            partnership_id: id.clone(),
            input: collaborator_input(&format!("Person{}", i)),
        })
        .await
        .unwrap();
        app.dispatch(Intent::AddMilestone {
            partnership_id: id.clone(),
            input: milestone_input(&format!("Step {}", i)),
        })
        .await
        .unwrap();
    }

    let partnership = app.store().get(&id).unwrap();
    let collaborator_ids: HashSet<&str> =
        partnership.collaborators.iter().map(|c| c.id.as_str()).collect();
    let milestone_ids: HashSet<&str> =
        partnership.milestones.iter().map(|m| m.id.as_str()).collect();

    assert_eq!(collaborator_ids.len(), 40);
    assert_eq!(milestone_ids.len(), 40);
    assert_eq!(partnership.milestones[0].title, "Step 0");
    assert_eq!(partnership.milestones[39].title, "Step 39");
}

#[rstest]
#[case(MilestoneStatus::Pending)]
#[case(MilestoneStatus::InProgress)]
#[case(MilestoneStatus::Completed)]
#[case(MilestoneStatus::Blocked)]
#[tokio::test]
async fn test_milestone_status_change_leaves_siblings(#[case] status: MilestoneStatus) {
    let (mut app, _) = memory_app().await;
    let id = create(&mut app, "Acme").await;

    let mut milestone_ids = Vec::new();
    for title in ["Kickoff", "Contract", "Launch"] {
        match app
            .dispatch(Intent::AddMilestone {
                partnership_id: id.clone(),
                input: milestone_input(title),
            })
            .await
            .unwrap()
        {
            Outcome::MilestoneAdded { milestone, .. } => milestone_ids.push(milestone.id),
            other => panic!("Expected MilestoneAdded, got {:?}", other),
        }
    }

    app.dispatch(Intent::UpdateMilestoneStatus {
        partnership_id: id.clone(),
        milestone_id: milestone_ids[1].clone(),
        status,
    })
    .await
    .unwrap();

    let milestones = &app.store().get(&id).unwrap().milestones;
    assert_eq!(milestones[0].status, MilestoneStatus::Pending);
    assert_eq!(milestones[1].status, status);
    assert_eq!(milestones[2].status, MilestoneStatus::Pending);
}

#[tokio::test]
async fn test_restart_reloads_collection_and_selects_first() {
    let (mut app, storage) = memory_app().await;
    let a = create(&mut app, "A").await;
    let b = create(&mut app, "B").await;
    app.dispatch(Intent::AddCollaborator {
        partnership_id: b.clone(),
        input: collaborator_input("Jo"),
    })
    .await
    .unwrap();
    let before = app.partnerships().to_vec();
    app.shutdown().await.unwrap();

    let reloaded = restart(&storage, PersistencePolicy::SkipEmpty).await;
    assert_eq!(reloaded.partnerships(), before.as_slice());
    assert_eq!(reloaded.selection().selected_id(), Some(a.as_str()));
    assert!(!reloaded.is_composing());
}

#[tokio::test]
async fn test_deleting_last_record_keeps_previous_blob_by_default() {
    let (mut app, storage) = memory_app().await;
    let id = create(&mut app, "Acme").await;
    app.dispatch(Intent::DeletePartnership { id: id.clone() })
        .await
        .unwrap();

    let reloaded = restart(&storage, PersistencePolicy::SkipEmpty).await;
    assert_eq!(reloaded.partnerships().len(), 1);
    assert_eq!(reloaded.partnerships()[0].id, id);
}

#[tokio::test]
async fn test_write_empty_policy_clears_blob() {
    let (mut app, storage) = memory_app_with_policy(PersistencePolicy::WriteEmpty).await;
    let id = create(&mut app, "Acme").await;
    app.dispatch(Intent::DeletePartnership { id }).await.unwrap();

    let reloaded = restart(&storage, PersistencePolicy::WriteEmpty).await;
    assert!(reloaded.partnerships().is_empty());
    assert!(reloaded.is_composing());
}

#[tokio::test]
async fn test_compose_and_cancel() {
    let (mut app, _) = memory_app().await;
    assert_eq!(app.dispatch(Intent::CancelCompose).await.unwrap(), Outcome::Ignored);
    assert!(app.is_composing());

    let a = create(&mut app, "A").await;
    let b = create(&mut app, "B").await;
    assert_eq!(app.selection().selected_id(), Some(b.as_str()));

    app.dispatch(Intent::ComposeNew).await.unwrap();
    assert!(app.is_composing());
    assert_eq!(app.selection().selected_id(), Some(b.as_str()));

    app.dispatch(Intent::CancelCompose).await.unwrap();
    assert!(!app.is_composing());
    assert_eq!(app.selection().selected_id(), Some(a.as_str()));

    app.dispatch(Intent::ComposeNew).await.unwrap();
    app.dispatch(Intent::Select { id: b.clone() }).await.unwrap();
    assert!(!app.is_composing());
    assert_eq!(app.selected().unwrap().id, b);
}

#[tokio::test]
async fn test_example_flow() {
    let (mut app, _) = memory_app().await;
    let created = match app
        .dispatch(Intent::CreatePartnership(PartnershipCreateInput {
            company_name: "Acme".to_string(),
            contact_email: "a@acme.com".to_string(),
            description: "Pilot".to_string(),
            ..Default::default()
        }))
        .await
        .unwrap()
    {
        Outcome::Created(p) => p,
        other => panic!("Expected Created, got {:?}", other),
    };
    assert_eq!(created.status.as_str(), "pending");

    app.dispatch(Intent::AddCollaborator {
        partnership_id: created.id.clone(),
        input: partnerdesk_partnerships::CollaboratorCreateInput {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            role: None,
        },
    })
    .await
    .unwrap();

    let partnership = app.selected().unwrap();
    assert_eq!(partnership.collaborators.len(), 1);
    assert_eq!(partnership.collaborators[0].role, None);
}

/// Storage whose writes fail until switched back on
#[derive(Default)]
struct FlakyStorage {
    inner: MemoryStorage,
    failing: AtomicBool,
}

#[async_trait]
impl KeyValueStorage for FlakyStorage {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Io(std::io::Error::other("disk full")));
        }
        self.inner.set_item(key, value).await
    }
}

#[tokio::test]
async fn test_failed_write_is_retried_on_shutdown() {
    let storage = Arc::new(FlakyStorage::default());
    storage.failing.store(true, Ordering::SeqCst);
    let adapter = PersistenceAdapter::new(storage.clone(), KEY).unwrap();
    let mut app = App::start(adapter).await;

    let result = app
        .dispatch(Intent::CreatePartnership(partnership_input("Acme")))
        .await;
    assert!(matches!(result, Err(AppError::Storage(_))));
    assert_eq!(app.partnerships().len(), 1);
    assert!(app.has_unsaved_changes());

    storage.failing.store(false, Ordering::SeqCst);
    app.shutdown().await.unwrap();

    let stored = storage.get_item(KEY).await.unwrap().unwrap();
    assert!(stored.contains("Acme"));
}
