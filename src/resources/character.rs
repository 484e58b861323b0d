use super::{EntityMeta, Related};
use crate::endpoint::END_CHARACTERS;
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A character as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(flatten)]
    pub simple: SimpleCharacter,
    /// Personality and appearance traits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<Vec<CharacterTrait>>,
    #[serde(flatten)]
    pub related: Related,
}

/// The user-settable fields of a character
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleCharacter {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_id: Option<i64>,
    pub is_dead: bool,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<i64>,
}

/// One line of a character's personality or appearance section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterTrait {
    pub id: i64,
    pub name: String,
    pub entry: String,
    /// Either "personality" or "appearance"
    pub section: String,
    pub default_order: i64,
}

impl Payload for SimpleCharacter {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

/// Characters of a campaign
#[derive(Debug, Clone)]
pub struct CharacterService {
    svc: Service,
}

impl CharacterService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        CharacterService {
            svc: Service::new(rest, END_CHARACTERS, "Character"),
        }
    }

    /// List the characters of a campaign, optionally only those changed since `sync`
    pub fn index(&self, camp_id: i64, sync: Option<&Time>) -> Result<List<Character>> {
        self.svc.index(self.svc.campaign(camp_id), sync)
    }

    pub fn get(&self, camp_id: i64, char_id: i64) -> Result<Character> {
        self.svc.get(self.svc.campaign(camp_id), char_id)
    }

    pub fn create(&self, camp_id: i64, ch: &SimpleCharacter) -> Result<Character> {
        self.svc.create(self.svc.campaign(camp_id), ch)
    }

    pub fn update(&self, camp_id: i64, char_id: i64, ch: &SimpleCharacter) -> Result<Character> {
        self.svc.update(self.svc.campaign(camp_id), char_id, ch)
    }

    pub fn delete(&self, camp_id: i64, char_id: i64) -> Result<()> {
        self.svc.delete(self.svc.campaign(camp_id), char_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::reencode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_character_from_api() {
        let json = r#"{
            "id": 1,
            "entity_id": 10,
            "name": "Irwie Gemstone",
            "entry": "<p>Lorem Ipsum.</p>",
            "image": "characters/irwie.jpg",
            "image_full": "https://kanka.io/storage/characters/irwie.jpg",
            "image_thumb": "https://kanka.io/storage/characters/irwie_thumb.jpg",
            "has_custom_image": true,
            "is_private": false,
            "tags": [4, 5],
            "created_at": "2019-01-28T20:48:26.000000Z",
            "created_by": 1,
            "updated_at": "2019-08-29T13:48:54.000000Z",
            "updated_by": 1,
            "location_id": 4,
            "title": "Queen",
            "age": "32",
            "sex": "Female",
            "race_id": 3,
            "type": "NPC",
            "family_id": 34,
            "is_dead": true,
            "traits": [
                {"id": 1, "name": "Hair", "entry": "Black", "section": "appearance", "default_order": 0}
            ]
        }"#;

        let ch: Character = serde_json::from_str(json).unwrap();
        assert_eq!(ch.meta.id, 1);
        assert_eq!(ch.meta.entity_id, 10);
        assert_eq!(ch.simple.name, "Irwie Gemstone");
        assert_eq!(ch.simple.kind.as_deref(), Some("NPC"));
        assert_eq!(ch.simple.tags, vec![4, 5]);
        assert!(ch.simple.is_dead);
        assert_eq!(ch.traits.unwrap()[0].section, "appearance");
        assert!(ch.related.attributes.is_none());
    }

    #[test]
    fn test_character_related() {
        let json = r#"{
            "id": 1,
            "name": "Irwie",
            "attributes": [{"id": 2, "entity_id": 10, "name": "Strength", "value": "14"}],
            "relations": []
        }"#;

        let ch: Character = serde_json::from_str(json).unwrap();
        let attributes = ch.related.attributes.unwrap();
        assert_eq!(attributes[0].simple.name, "Strength");
        assert_eq!(ch.related.relations, Some(vec![]));
    }

    #[test]
    fn test_character_round_trip() {
        let simple = SimpleCharacter {
            name: "Irwie".into(),
            entry: Some("<p>Queen of the north</p>".into()),
            title: Some("Queen".into()),
            age: Some("32".into()),
            sex: Some("Female".into()),
            kind: Some("NPC".into()),
            location_id: Some(4),
            family_id: Some(34),
            race_id: Some(3),
            is_dead: true,
            is_private: true,
            tags: vec![1, 2],
        };

        let full: Character = reencode(&simple);
        assert_eq!(full.simple, simple);
    }

    #[test]
    fn test_character_payload_requires_name() {
        let err = SimpleCharacter::default().to_payload().unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_character_payload_skips_unset() {
        let body = SimpleCharacter {
            name: "Irwie".into(),
            ..Default::default()
        }
        .to_payload()
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Irwie", "is_dead": false, "is_private": false})
        );
    }
}
