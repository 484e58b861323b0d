use super::{EntityMeta, Related};
use crate::endpoint::END_EVENTS;
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A historical or planned event of the campaign world
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(flatten)]
    pub simple: SimpleEvent,
    #[serde(flatten)]
    pub related: Related,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleEvent {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// In-world date, free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<i64>,
}

impl Payload for SimpleEvent {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

/// Events of a campaign
#[derive(Debug, Clone)]
pub struct EventService {
    svc: Service,
}

impl EventService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        EventService {
            svc: Service::new(rest, END_EVENTS, "Event"),
        }
    }

    pub fn index(&self, camp_id: i64, sync: Option<&Time>) -> Result<List<Event>> {
        self.svc.index(self.svc.campaign(camp_id), sync)
    }

    pub fn get(&self, camp_id: i64, event_id: i64) -> Result<Event> {
        self.svc.get(self.svc.campaign(camp_id), event_id)
    }

    pub fn create(&self, camp_id: i64, event: &SimpleEvent) -> Result<Event> {
        self.svc.create(self.svc.campaign(camp_id), event)
    }

    pub fn update(&self, camp_id: i64, event_id: i64, event: &SimpleEvent) -> Result<Event> {
        self.svc.update(self.svc.campaign(camp_id), event_id, event)
    }

    pub fn delete(&self, camp_id: i64, event_id: i64) -> Result<()> {
        self.svc.delete(self.svc.campaign(camp_id), event_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::reencode;

    #[test]
    fn test_event_round_trip() {
        let simple = SimpleEvent {
            name: "Fall of the Tower".into(),
            entry: None,
            kind: Some("Battle".into()),
            date: Some("1024-03-01".into()),
            location_id: Some(8),
            is_private: false,
            tags: vec![2],
        };
        let full: Event = reencode(&simple);
        assert_eq!(full.simple, simple);
    }
}
