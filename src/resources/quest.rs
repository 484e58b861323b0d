use super::{EntityMeta, Related};
use crate::endpoint::END_QUESTS;
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A quest as returned by the API.
///
/// The characters, items, locations and organisations taking part in a quest
/// are separate resources, see [`crate::resources::quest_element`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quest {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(flatten)]
    pub simple: SimpleQuest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<i64>,
    #[serde(flatten)]
    pub related: Related,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleQuest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Parent quest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quest_id: Option<i64>,
    /// Quest giver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_id: Option<i64>,
    pub is_completed: bool,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<i64>,
}

impl Payload for SimpleQuest {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

/// Quests of a campaign
#[derive(Debug, Clone)]
pub struct QuestService {
    svc: Service,
}

impl QuestService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        QuestService {
            svc: Service::new(rest, END_QUESTS, "Quest"),
        }
    }

    pub fn index(&self, camp_id: i64, sync: Option<&Time>) -> Result<List<Quest>> {
        self.svc.index(self.svc.campaign(camp_id), sync)
    }

    pub fn get(&self, camp_id: i64, quest_id: i64) -> Result<Quest> {
        self.svc.get(self.svc.campaign(camp_id), quest_id)
    }

    pub fn create(&self, camp_id: i64, quest: &SimpleQuest) -> Result<Quest> {
        self.svc.create(self.svc.campaign(camp_id), quest)
    }

    pub fn update(&self, camp_id: i64, quest_id: i64, quest: &SimpleQuest) -> Result<Quest> {
        self.svc.update(self.svc.campaign(camp_id), quest_id, quest)
    }

    pub fn delete(&self, camp_id: i64, quest_id: i64) -> Result<()> {
        self.svc.delete(self.svc.campaign(camp_id), quest_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::reencode;

    #[test]
    fn test_quest_counts() {
        let json = r#"{"id": 5, "name": "Find the sword", "is_completed": true, "characters": 3, "locations": 0}"#;
        let quest: Quest = serde_json::from_str(json).unwrap();
        assert!(quest.simple.is_completed);
        assert_eq!(quest.characters, Some(3));
        assert_eq!(quest.locations, Some(0));
    }

    #[test]
    fn test_quest_round_trip() {
        let simple = SimpleQuest {
            name: "Find the sword".into(),
            entry: None,
            kind: Some("Main".into()),
            quest_id: None,
            character_id: Some(9),
            is_completed: false,
            is_private: true,
            tags: vec![5, 6],
        };
        let full: Quest = reencode(&simple);
        assert_eq!(full.simple, simple);
    }
}
