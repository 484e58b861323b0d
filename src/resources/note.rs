use super::{EntityMeta, Related};
use crate::endpoint::END_NOTES;
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A campaign note (lore, house rules, session recaps...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(flatten)]
    pub simple: SimpleNote,
    #[serde(flatten)]
    pub related: Related,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleNote {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Parent note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_id: Option<i64>,
    /// Shown on the campaign dashboard
    pub is_pinned: bool,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<i64>,
}

impl Payload for SimpleNote {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone)]
pub struct NoteService {
    svc: Service,
}

impl NoteService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        NoteService {
            svc: Service::new(rest, END_NOTES, "Note"),
        }
    }

    pub fn index(&self, camp_id: i64, sync: Option<&Time>) -> Result<List<Note>> {
        self.svc.index(self.svc.campaign(camp_id), sync)
    }

    pub fn get(&self, camp_id: i64, note_id: i64) -> Result<Note> {
        self.svc.get(self.svc.campaign(camp_id), note_id)
    }

    pub fn create(&self, camp_id: i64, note: &SimpleNote) -> Result<Note> {
        self.svc.create(self.svc.campaign(camp_id), note)
    }

    pub fn update(&self, camp_id: i64, note_id: i64, note: &SimpleNote) -> Result<Note> {
        self.svc.update(self.svc.campaign(camp_id), note_id, note)
    }

    pub fn delete(&self, camp_id: i64, note_id: i64) -> Result<()> {
        self.svc.delete(self.svc.campaign(camp_id), note_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::reencode;

    #[test]
    fn test_note_round_trip() {
        let simple = SimpleNote {
            name: "House rules".into(),
            entry: Some("<p>Crits explode.</p>".into()),
            kind: Some("Rules".into()),
            note_id: Some(3),
            is_pinned: true,
            is_private: false,
            tags: vec![],
        };
        let full: Note = reencode(&simple);
        assert_eq!(full.simple, simple);
    }

    #[test]
    fn test_note_payload_requires_name() {
        let note = SimpleNote {
            name: " ".into(),
            ..Default::default()
        };
        assert!(note.to_payload().is_err());
    }
}
