//! Draft storage behind an injected key-value interface
//!
//! Draft-saving operations take the store as an explicit parameter; the
//! store is owned by the caller and there is no global instance.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{GrantflowError, Result};

/// A minimal key-value store for unsent drafts.
pub trait DraftStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory draft store
#[derive(Debug, Clone, Default)]
pub struct MemoryDraftStore {
    entries: HashMap<String, String>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store seeded with existing entries (e.g. read from disk)
    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        MemoryDraftStore { entries }
    }

    /// All entries, for persisting the store back to disk
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }
}

impl DraftStore for MemoryDraftStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// An unsubmitted fund requisition, saved while the researcher assembles it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitionDraft {
    pub milestone_id: String,
    pub amount: f64,
    pub notes: String,
}

fn draft_key(project_id: &str) -> String {
    format!("requisition/{}", project_id)
}

/// Save a requisition draft for a project, replacing any existing draft.
pub fn save_requisition_draft(
    store: &mut dyn DraftStore,
    project_id: &str,
    draft: &RequisitionDraft,
) -> Result<()> {
    let value = serde_json::to_string(draft)
        .map_err(|e| GrantflowError::InvalidJson(e.to_string()))?;
    debug!(project_id, "saving requisition draft");
    store.set(&draft_key(project_id), value);
    Ok(())
}

/// Load the saved requisition draft for a project, if any.
pub fn load_requisition_draft(
    store: &dyn DraftStore,
    project_id: &str,
) -> Result<Option<RequisitionDraft>> {
    match store.get(&draft_key(project_id)) {
        None => Ok(None),
        Some(value) => serde_json::from_str(&value)
            .map(Some)
            .map_err(|e| {
                GrantflowError::InvalidJson(format!(
                    "corrupt requisition draft for project {}: {}",
                    project_id, e
                ))
            }),
    }
}

/// Discard the saved requisition draft for a project.
pub fn clear_requisition_draft(store: &mut dyn DraftStore, project_id: &str) {
    debug!(project_id, "clearing requisition draft");
    store.remove(&draft_key(project_id));
}
