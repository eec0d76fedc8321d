//! Client-local draft courses.
//!
//! Drafts belong to the client that created them. The server never reads or
//! writes this store; the dashboard only tells the client whether to render
//! it (see [`crate::domain::pages::LocalDraftsSection`]).

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::CourseTitle;

/// Errors raised when editing local drafts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocalDraftError {
    #[error("draft {0} does not exist")]
    UnknownDraft(Uuid),
    #[error("draft title must not be empty")]
    EmptyTitle,
}

/// A draft course kept on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalDraft {
    pub id: Uuid,
    pub title: CourseTitle,
    pub updated_at: DateTime<Utc>,
}

/// In-memory draft store owned by one client.
pub struct LocalDrafts {
    drafts: Vec<LocalDraft>,
    clock: Arc<dyn Clock>,
}

impl LocalDrafts {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            drafts: Vec::new(),
            clock,
        }
    }

    /// Create a draft and return its id.
    pub fn create(&mut self, title: &str) -> Result<Uuid, LocalDraftError> {
        let title = CourseTitle::new(title).map_err(|_| LocalDraftError::EmptyTitle)?;
        let id = Uuid::new_v4();
        self.drafts.push(LocalDraft {
            id,
            title,
            updated_at: self.clock.utc(),
        });
        Ok(id)
    }

    /// Rename a draft, bumping its update time.
    pub fn rename(&mut self, id: Uuid, title: &str) -> Result<(), LocalDraftError> {
        let title = CourseTitle::new(title).map_err(|_| LocalDraftError::EmptyTitle)?;
        let now = self.clock.utc();
        let draft = self
            .drafts
            .iter_mut()
            .find(|draft| draft.id == id)
            .ok_or(LocalDraftError::UnknownDraft(id))?;
        draft.title = title;
        draft.updated_at = now;
        Ok(())
    }

    /// Remove a draft.
    pub fn discard(&mut self, id: Uuid) -> Result<LocalDraft, LocalDraftError> {
        let index = self
            .drafts
            .iter()
            .position(|draft| draft.id == id)
            .ok_or(LocalDraftError::UnknownDraft(id))?;
        Ok(self.drafts.remove(index))
    }

    /// Drafts ordered by most recent update first.
    pub fn list(&self) -> Vec<LocalDraft> {
        let mut drafts = self.drafts.clone();
        drafts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        drafts
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}
