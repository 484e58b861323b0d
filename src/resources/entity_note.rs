use super::Audit;
use crate::endpoint::END_ENTITY_NOTES;
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A note attached to an entity, shown as an extra tab on its page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityNote {
    pub id: i64,
    pub entity_id: i64,
    #[serde(flatten)]
    pub simple: SimpleEntityNote,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleEntityNote {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    /// "all", "admin", "self" or "members"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

impl Payload for SimpleEntityNote {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone)]
pub struct EntityNoteService {
    svc: Service,
}

impl EntityNoteService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        EntityNoteService {
            svc: Service::new(rest, END_ENTITY_NOTES, "Entity Note"),
        }
    }

    pub fn index(
        &self,
        camp_id: i64,
        ent_id: i64,
        sync: Option<&Time>,
    ) -> Result<List<EntityNote>> {
        self.svc.index(self.svc.entity(camp_id, ent_id), sync)
    }

    pub fn get(&self, camp_id: i64, ent_id: i64, note_id: i64) -> Result<EntityNote> {
        self.svc.get(self.svc.entity(camp_id, ent_id), note_id)
    }

    pub fn create(&self, camp_id: i64, ent_id: i64, note: &SimpleEntityNote) -> Result<EntityNote> {
        self.svc.create(self.svc.entity(camp_id, ent_id), note)
    }

    pub fn update(
        &self,
        camp_id: i64,
        ent_id: i64,
        note_id: i64,
        note: &SimpleEntityNote,
    ) -> Result<EntityNote> {
        self.svc.update(self.svc.entity(camp_id, ent_id), note_id, note)
    }

    pub fn delete(&self, camp_id: i64, ent_id: i64, note_id: i64) -> Result<()> {
        self.svc.delete(self.svc.entity(camp_id, ent_id), note_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::reencode;

    #[test]
    fn test_entity_note_round_trip() {
        let simple = SimpleEntityNote {
            name: "Secrets".into(),
            entry: Some("<p>She is the king's sister.</p>".into()),
            visibility: Some("admin".into()),
        };
        let full: EntityNote = reencode(&simple);
        assert_eq!(full.simple, simple);
    }
}
