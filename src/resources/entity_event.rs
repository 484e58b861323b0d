use super::Audit;
use crate::endpoint::END_ENTITY_EVENTS;
use crate::error::{Result, ValidationError};
use crate::payload::{check_range, require_id, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A calendar date attached to an entity (birthday, anniversary...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityEvent {
    pub id: i64,
    pub entity_id: i64,
    #[serde(flatten)]
    pub simple: SimpleEntityEvent,
    /// Rendered date, `year-month-day`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleEntityEvent {
    pub calendar_id: i64,
    pub day: i64,
    pub month: i64,
    pub year: i64,
    /// Duration in days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_until: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    pub is_private: bool,
}

impl Payload for SimpleEntityEvent {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_id("calendar_id", self.calendar_id)?;
        check_range("day", self.day, 1, i64::MAX)?;
        check_range("month", self.month, 1, i64::MAX)
    }
}

/// Calendar events of an entity
#[derive(Debug, Clone)]
pub struct EntityEventService {
    svc: Service,
}

impl EntityEventService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        EntityEventService {
            svc: Service::new(rest, END_ENTITY_EVENTS, "Entity Event"),
        }
    }

    pub fn index(
        &self,
        camp_id: i64,
        ent_id: i64,
        sync: Option<&Time>,
    ) -> Result<List<EntityEvent>> {
        self.svc.index(self.svc.entity(camp_id, ent_id), sync)
    }

    pub fn get(&self, camp_id: i64, ent_id: i64, event_id: i64) -> Result<EntityEvent> {
        self.svc.get(self.svc.entity(camp_id, ent_id), event_id)
    }

    pub fn create(
        &self,
        camp_id: i64,
        ent_id: i64,
        event: &SimpleEntityEvent,
    ) -> Result<EntityEvent> {
        self.svc.create(self.svc.entity(camp_id, ent_id), event)
    }

    pub fn update(
        &self,
        camp_id: i64,
        ent_id: i64,
        event_id: i64,
        event: &SimpleEntityEvent,
    ) -> Result<EntityEvent> {
        self.svc.update(self.svc.entity(camp_id, ent_id), event_id, event)
    }

    pub fn delete(&self, camp_id: i64, ent_id: i64, event_id: i64) -> Result<()> {
        self.svc.delete(self.svc.entity(camp_id, ent_id), event_id)
    }
}
