use super::{EntityMeta, Related};
use crate::endpoint::END_TAGS;
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A tag as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(flatten)]
    pub simple: SimpleTag,
    /// IDs of the tagged entities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<i64>>,
    #[serde(flatten)]
    pub related: Related,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleTag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    /// Parent tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<i64>,
    pub is_private: bool,
}

impl Payload for SimpleTag {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

/// Tags of a campaign
#[derive(Debug, Clone)]
pub struct TagService {
    svc: Service,
}

impl TagService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        TagService {
            svc: Service::new(rest, END_TAGS, "Tag"),
        }
    }

    pub fn index(&self, camp_id: i64, sync: Option<&Time>) -> Result<List<Tag>> {
        self.svc.index(self.svc.campaign(camp_id), sync)
    }

    pub fn get(&self, camp_id: i64, tag_id: i64) -> Result<Tag> {
        self.svc.get(self.svc.campaign(camp_id), tag_id)
    }

    pub fn create(&self, camp_id: i64, tag: &SimpleTag) -> Result<Tag> {
        self.svc.create(self.svc.campaign(camp_id), tag)
    }

    pub fn update(&self, camp_id: i64, tag_id: i64, tag: &SimpleTag) -> Result<Tag> {
        self.svc.update(self.svc.campaign(camp_id), tag_id, tag)
    }

    pub fn delete(&self, camp_id: i64, tag_id: i64) -> Result<()> {
        self.svc.delete(self.svc.campaign(camp_id), tag_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::reencode;

    #[test]
    fn test_tag_entities() {
        let json = r#"{"id": 1, "name": "Villain", "colour": "red", "entities": [4, 9]}"#;
        let tag: Tag = serde_json::from_str(json).unwrap();
        assert_eq!(tag.simple.colour.as_deref(), Some("red"));
        assert_eq!(tag.entities, Some(vec![4, 9]));
    }

    #[test]
    fn test_tag_round_trip() {
        let simple = SimpleTag {
            name: "Villain".into(),
            entry: None,
            kind: Some("Role".into()),
            colour: Some("red".into()),
            tag_id: Some(2),
            is_private: false,
        };
        let full: Tag = reencode(&simple);
        assert_eq!(full.simple, simple);
    }
}
