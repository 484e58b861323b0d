//! Typed services and data shapes for every Kanka resource.
//!
//! Each resource comes in two forms: a `Simple*` struct with the fields a
//! client may set, used as the create/update body, and a full struct that
//! embeds the simple form and adds the fields assigned by the server.

use crate::time::Time;
use serde::{Deserialize, Serialize};

pub mod attribute;
pub mod calendar;
pub mod campaign;
pub mod character;
pub mod conversation;
pub mod dice_roll;
pub mod entity_event;
pub mod entity_file;
pub mod entity_inventory;
pub mod entity_note;
pub mod entity_tag;
pub mod event;
pub mod family;
pub mod item;
pub mod journal;
pub mod location;
pub mod map_point;
pub mod note;
pub mod organization;
pub mod organization_member;
pub mod profile;
pub mod quest;
pub mod quest_element;
pub mod race;
pub mod relation;
pub mod search;
pub mod tag;

pub use attribute::{Attribute, AttributeService, SimpleAttribute};
pub use calendar::{
    Calendar, CalendarMonth, CalendarMoon, CalendarSeason, CalendarService, SimpleCalendar,
};
pub use campaign::{Campaign, CampaignMember, CampaignService, CampaignUser};
pub use character::{Character, CharacterService, CharacterTrait, SimpleCharacter};
pub use conversation::{Conversation, ConversationService, SimpleConversation};
pub use dice_roll::{DiceRoll, DiceRollService, SimpleDiceRoll};
pub use entity_event::{EntityEvent, EntityEventService, SimpleEntityEvent};
pub use entity_file::{EntityFile, EntityFileService, SimpleEntityFile};
pub use entity_inventory::{EntityInventory, EntityInventoryService, SimpleEntityInventory};
pub use entity_note::{EntityNote, EntityNoteService, SimpleEntityNote};
pub use entity_tag::{EntityTag, EntityTagService, SimpleEntityTag};
pub use event::{Event, EventService, SimpleEvent};
pub use family::{Family, FamilyService, SimpleFamily};
pub use item::{Item, ItemService, SimpleItem};
pub use journal::{Journal, JournalService, SimpleJournal};
pub use location::{Location, LocationService, SimpleLocation};
pub use map_point::{MapPoint, MapPointService, SimpleMapPoint};
pub use note::{Note, NoteService, SimpleNote};
pub use organization::{Organization, OrganizationService, SimpleOrganization};
pub use organization_member::{
    OrganizationMember, OrganizationMemberService, SimpleOrganizationMember,
};
pub use profile::{Profile, ProfileService};
pub use quest::{Quest, QuestService, SimpleQuest};
pub use quest_element::{
    QuestCharacter, QuestCharacterService, QuestItem, QuestItemService, QuestLocation,
    QuestLocationService, QuestOrganization, QuestOrganizationService, SimpleQuestCharacter,
    SimpleQuestItem, SimpleQuestLocation, SimpleQuestOrganization,
};
pub use race::{Race, RaceService, SimpleRace};
pub use relation::{Relation, RelationService, SimpleRelation};
pub use search::{SearchResult, SearchService};
pub use tag::{SimpleTag, Tag, TagService};

/// Creation and modification stamps carried by every stored record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Audit {
    pub created_at: Option<Time>,
    pub created_by: Option<i64>,
    pub updated_at: Option<Time>,
    pub updated_by: Option<i64>,
}

/// Server-assigned fields shared by the entity-type resources
/// (characters, locations, items, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityMeta {
    pub id: i64,
    /// ID of the generic entity backing this record, used by the
    /// `entities/{id}/...` sub-resources
    pub entity_id: i64,
    pub image: Option<String>,
    pub image_full: Option<String>,
    pub image_thumb: Option<String>,
    pub has_custom_image: bool,
    #[serde(flatten)]
    pub audit: Audit,
}

/// Sub-resources the API embeds when a listing is requested with related data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Related {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_events: Option<Vec<EntityEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_files: Option<Vec<EntityFile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_notes: Option<Vec<EntityNote>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Vec<EntityInventory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<Vec<Relation>>,
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::client::Config;
    use crate::error::Result;
    use crate::rest::{HttpRequest, HttpResponse, RestContext, Transport};
    use crate::token::Token;
    use serde::de::DeserializeOwned;
    use serde::Serialize;
    use std::sync::Arc;

    /// Answers every request with the same status and body
    pub(crate) struct Canned {
        pub(crate) status: u16,
        pub(crate) body: &'static str,
    }

    impl Transport for Canned {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse> {
            Ok(HttpResponse {
                status: self.status,
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    pub(crate) fn canned_rest(status: u16, body: &'static str) -> Arc<RestContext> {
        let transport = Canned { status, body };
        Arc::new(RestContext::new(
            Token::new("tok"),
            Config::default(),
            Box::new(transport),
        ))
    }

    /// Encode a simple form and decode it as the full form
    pub(crate) fn reencode<S, F>(simple: &S) -> F
    where
        S: Serialize,
        F: DeserializeOwned,
    {
        let json = serde_json::to_string(simple).unwrap();
        serde_json::from_str(&json).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_meta_from_api() {
        let json = r#"{
            "id": 3,
            "entity_id": 19,
            "image": "characters/abc.jpg",
            "image_full": "https://kanka.io/storage/characters/abc.jpg",
            "image_thumb": null,
            "has_custom_image": true,
            "created_at": "2019-01-28T20:48:26.000000Z",
            "created_by": 1,
            "updated_at": "2019-08-29T13:48:54.000000Z",
            "updated_by": null
        }"#;

        let meta: EntityMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.id, 3);
        assert_eq!(meta.entity_id, 19);
        assert!(meta.has_custom_image);
        assert!(meta.image_thumb.is_none());
        assert_eq!(meta.audit.created_by, Some(1));
        assert!(meta.audit.updated_at.is_some());
        assert!(meta.audit.updated_by.is_none());
    }

    #[test]
    fn test_related_absent() {
        let related: Related = serde_json::from_str("{}").unwrap();
        assert_eq!(related, Related::default());
    }
}
