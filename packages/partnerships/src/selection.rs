// ABOUTME: Selection and view-mode state
// ABOUTME: Tracks the selected partnership and whether the creation form is showing

use crate::store::PartnershipStore;
use tracing::debug;

/// The selected partnership (held by id, so it never goes stale) and the composing flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    selected_id: Option<String>,
    composing: bool,
}

impl Selection {
    /// First-load rule: select the first record if any, otherwise show the creation form
    pub fn initial(store: &PartnershipStore) -> Self {
        match store.first() {
            Some(first) => Self {
                selected_id: Some(first.id.clone()),
                composing: false,
            },
            None => Self {
                selected_id: None,
                composing: true,
            },
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// A newly created record is always selected and the form closes
    pub fn on_created(&mut self, id: &str) {
        self.selected_id = Some(id.to_string());
        self.composing = false;
    }

    /// Call after `id` was removed from `store`
    pub fn on_deleted(&mut self, id: &str, store: &PartnershipStore) {
        if !self.is_selected(id) {
            return;
        }

        self.selected_id = store.first().map(|p| p.id.clone());
        self.composing = store.is_empty();
        debug!(
            "Selected partnership deleted, selection moved to {:?}",
            self.selected_id
        );
    }

    pub fn select(&mut self, id: &str) {
        self.selected_id = Some(id.to_string());
        self.composing = false;
    }

    /// Opens the creation form; the selection is kept for when it closes
    pub fn compose_new(&mut self) {
        self.composing = true;
    }

    /// Closes the creation form and selects the first record.
    /// Ignored when there is nothing to fall back to.
    pub fn cancel_compose(&mut self, store: &PartnershipStore) -> bool {
        match store.first() {
            Some(first) => {
                self.selected_id = Some(first.id.clone());
                self.composing = false;
                true
            }
            None => false,
        }
    }
}
