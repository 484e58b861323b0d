use super::{EntityMeta, Related};
use crate::endpoint::END_CONVERSATIONS;
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A conversation between characters or campaign members
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conversation {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(flatten)]
    pub simple: SimpleConversation,
    /// Number of participants
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<i64>,
    /// Number of messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<i64>,
    #[serde(flatten)]
    pub related: Related,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleConversation {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Who talks: "members" or "characters"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<i64>,
}

impl Payload for SimpleConversation {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone)]
pub struct ConversationService {
    svc: Service,
}

impl ConversationService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        ConversationService {
            svc: Service::new(rest, END_CONVERSATIONS, "Conversation"),
        }
    }

    pub fn index(&self, camp_id: i64, sync: Option<&Time>) -> Result<List<Conversation>> {
        self.svc.index(self.svc.campaign(camp_id), sync)
    }

    pub fn get(&self, camp_id: i64, conv_id: i64) -> Result<Conversation> {
        self.svc.get(self.svc.campaign(camp_id), conv_id)
    }

    pub fn create(&self, camp_id: i64, conv: &SimpleConversation) -> Result<Conversation> {
        self.svc.create(self.svc.campaign(camp_id), conv)
    }

    pub fn update(
        &self,
        camp_id: i64,
        conv_id: i64,
        conv: &SimpleConversation,
    ) -> Result<Conversation> {
        self.svc.update(self.svc.campaign(camp_id), conv_id, conv)
    }

    pub fn delete(&self, camp_id: i64, conv_id: i64) -> Result<()> {
        self.svc.delete(self.svc.campaign(camp_id), conv_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::reencode;

    #[test]
    fn test_conversation_round_trip() {
        let simple = SimpleConversation {
            name: "Council of Elrond".into(),
            kind: Some("Meeting".into()),
            target: Some("characters".into()),
            is_private: false,
            tags: vec![1],
        };
        let full: Conversation = reencode(&simple);
        assert_eq!(full.simple, simple);
    }
}
