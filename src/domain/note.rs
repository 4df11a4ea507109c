//! Free-form operator notes, pinned to a calendar day.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub color: Option<String>,
    /// The day the note is attached to, distinct from `created_at`.
    pub date: NaiveDateTime,
    pub is_completed: bool,
    pub created_at: NaiveDateTime,
}

impl Identifiable for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Note {
    fn display_label(&self) -> String {
        format!("note:{}", self.title)
    }
}
