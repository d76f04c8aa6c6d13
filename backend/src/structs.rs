use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub description: String,
    pub created_on: DateTime<Utc>,
}

pub type NoteMap = HashMap<String, Note>;

/// A note together with the key it is stored under, as rendered by the edit form.
#[derive(Serialize, Debug, Clone)]
pub struct EditNote {
    pub id: String,
    #[serde(flatten)]
    pub note: Note,
}

/// Fields posted by the add and edit forms. Both must be present, empty is fine.
#[derive(FromForm, Debug, Clone)]
pub struct NoteForm {
    pub title: String,
    pub description: String,
}
