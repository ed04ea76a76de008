// ABOUTME: Application context owning the store, selection, and persistence
// ABOUTME: Views hand intents to `App::dispatch`; changes are persisted before it returns

use crate::selection::Selection;
use crate::store::{PartnershipStore, StoreError};
use partnerdesk_core::{
    Collaborator, CollaboratorCreateInput, Milestone, MilestoneCreateInput, MilestoneStatus,
    Partnership, PartnershipCreateInput, PartnershipUpdateInput,
};
use partnerdesk_storage::{LoadOutcome, PersistenceAdapter, StorageError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Application errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Failed to save partnerships: {0}")]
    Storage(#[from] StorageError),
}

pub type AppResult<T> = Result<T, AppError>;

/// A user action produced by a view
#[derive(Debug, Clone)]
pub enum Intent {
    CreatePartnership(PartnershipCreateInput),
    UpdatePartnership {
        id: String,
        updates: PartnershipUpdateInput,
    },
    DeletePartnership {
        id: String,
    },
    AddCollaborator {
        partnership_id: String,
        input: CollaboratorCreateInput,
    },
    AddMilestone {
        partnership_id: String,
        input: MilestoneCreateInput,
    },
    UpdateMilestoneStatus {
        partnership_id: String,
        milestone_id: String,
        status: MilestoneStatus,
    },
    Select {
        id: String,
    },
    ComposeNew,
    CancelCompose,
}

/// What a dispatched intent did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Created(Partnership),
    Updated { id: String },
    Deleted { id: String },
    CollaboratorAdded {
        partnership_id: String,
        collaborator: Collaborator,
    },
    MilestoneAdded {
        partnership_id: String,
        milestone: Milestone,
    },
    MilestoneStatusChanged {
        partnership_id: String,
        milestone_id: String,
        status: MilestoneStatus,
    },
    /// Selection or composing mode changed; the collection did not
    ViewChanged,
    /// The intent referred to an id that does not exist; nothing changed
    Ignored,
}

impl Outcome {
    /// Whether the partnership collection changed
    pub fn changed_collection(&self) -> bool {
        !matches!(self, Outcome::ViewChanged | Outcome::Ignored)
    }
}

/// Owns all application state between `start` and `shutdown`
pub struct App {
    store: PartnershipStore,
    selection: Selection,
    persistence: PersistenceAdapter,
    load_outcome: LoadOutcome,
    unsaved: bool,
}

impl App {
    /// Loads the stored collection and applies the first-load selection rule
    pub async fn start(persistence: PersistenceAdapter) -> Self {
        let (partnerships, load_outcome) = persistence.load().await;
        let store = PartnershipStore::from_partnerships(partnerships);
        let selection = Selection::initial(&store);
        info!("PartnerDesk started with {} partnerships", store.len());

        Self {
            store,
            selection,
            persistence,
            load_outcome,
            unsaved: false,
        }
    }

    pub fn store(&self) -> &PartnershipStore {
        &self.store
    }

    pub fn partnerships(&self) -> &[Partnership] {
        self.store.partnerships()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The currently selected record, always read from the current collection
    pub fn selected(&self) -> Option<&Partnership> {
        self.selection
            .selected_id()
            .and_then(|id| self.store.get(id))
    }

    pub fn is_composing(&self) -> bool {
        self.selection.is_composing()
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Applies one intent. Validation failures leave all state untouched.
    pub async fn dispatch(&mut self, intent: Intent) -> AppResult<Outcome> {
        let outcome = self.apply(intent)?;

        if outcome.changed_collection() {
            self.unsaved = true;
            self.persist().await?;
        }

        Ok(outcome)
    }

    fn apply(&mut self, intent: Intent) -> Result<Outcome, StoreError> {
        let outcome = match intent {
            Intent::CreatePartnership(input) => {
                let partnership = self.store.create_partnership(input)?;
                self.selection.on_created(&partnership.id);
                Outcome::Created(partnership)
            }
            Intent::UpdatePartnership { id, updates } => {
                if self.store.update_partnership(&id, updates)? {
                    Outcome::Updated { id }
                } else {
                    Outcome::Ignored
                }
            }
            Intent::DeletePartnership { id } => {
                if self.store.delete_partnership(&id) {
                    self.selection.on_deleted(&id, &self.store);
                    Outcome::Deleted { id }
                } else {
                    Outcome::Ignored
                }
            }
            Intent::AddCollaborator {
                partnership_id,
                input,
            } => match self.store.add_collaborator(&partnership_id, input)? {
                Some(collaborator) => Outcome::CollaboratorAdded {
                    partnership_id,
                    collaborator,
                },
                None => Outcome::Ignored,
            },
            Intent::AddMilestone {
                partnership_id,
                input,
            } => match self.store.add_milestone(&partnership_id, input)? {
                Some(milestone) => Outcome::MilestoneAdded {
                    partnership_id,
                    milestone,
                },
                None => Outcome::Ignored,
            },
            Intent::UpdateMilestoneStatus {
                partnership_id,
                milestone_id,
                status,
            } => {
                if self
                    .store
                    .update_milestone_status(&partnership_id, &milestone_id, status)
                {
                    Outcome::MilestoneStatusChanged {
                        partnership_id,
                        milestone_id,
                        status,
                    }
                } else {
                    Outcome::Ignored
                }
            }
            Intent::Select { id } => {
                if self.store.contains(&id) {
                    self.selection.select(&id);
                    Outcome::ViewChanged
                } else {
                    Outcome::Ignored
                }
            }
            Intent::ComposeNew => {
                self.selection.compose_new();
                Outcome::ViewChanged
            }
            Intent::CancelCompose => {
                if self.selection.cancel_compose(&self.store) {
                    Outcome::ViewChanged
                } else {
                    Outcome::Ignored
                }
            }
        };

        debug!("Dispatched intent: {:?}", outcome);
        Ok(outcome)
    }

    async fn persist(&mut self) -> AppResult<()> {
        self.persistence.save(self.store.partnerships()).await?;
        self.unsaved = false;
        Ok(())
    }

    /// Whether the last change has not reached storage yet
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Retries a failed write, if any, and ends the session
    pub async fn shutdown(mut self) -> AppResult<()> {
        if self.unsaved {
            warn!("Retrying save of unsaved partnerships before exit");
            self.persist().await?;
        }
        info!("PartnerDesk stopped");
        Ok(())
    }
}
