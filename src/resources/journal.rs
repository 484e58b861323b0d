use super::{EntityMeta, Related};
use crate::endpoint::END_JOURNALS;
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Journal {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(flatten)]
    pub simple: SimpleJournal,
    #[serde(flatten)]
    pub related: Related,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleJournal {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Real-world session date, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_id: Option<i64>,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<i64>,
}

impl Payload for SimpleJournal {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

/// Journals (session reports) of a campaign
#[derive(Debug, Clone)]
pub struct JournalService {
    svc: Service,
}

impl JournalService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        JournalService {
            svc: Service::new(rest, END_JOURNALS, "Journal"),
        }
    }

    pub fn index(&self, camp_id: i64, sync: Option<&Time>) -> Result<List<Journal>> {
        self.svc.index(self.svc.campaign(camp_id), sync)
    }

    pub fn get(&self, camp_id: i64, jrn_id: i64) -> Result<Journal> {
        self.svc.get(self.svc.campaign(camp_id), jrn_id)
    }

    pub fn create(&self, camp_id: i64, jrn: &SimpleJournal) -> Result<Journal> {
        self.svc.create(self.svc.campaign(camp_id), jrn)
    }

    pub fn update(&self, camp_id: i64, jrn_id: i64, jrn: &SimpleJournal) -> Result<Journal> {
        self.svc.update(self.svc.campaign(camp_id), jrn_id, jrn)
    }

    pub fn delete(&self, camp_id: i64, jrn_id: i64) -> Result<()> {
        self.svc.delete(self.svc.campaign(camp_id), jrn_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::reencode;

    #[test]
    fn test_journal_round_trip() {
        let simple = SimpleJournal {
            name: "Session 12".into(),
            entry: Some("The party split up.".into()),
            kind: Some("Session".into()),
            date: Some("2019-06-01".into()),
            character_id: Some(1),
            is_private: false,
            tags: vec![],
        };
        let full: Journal = reencode(&simple);
        assert_eq!(full.simple, simple);
    }
}
