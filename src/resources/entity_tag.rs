use crate::endpoint::END_ENTITY_TAGS;
use crate::error::{Result, ValidationError};
use crate::payload::{require_id, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Link between an entity and a tag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityTag {
    pub id: i64,
    pub entity_id: i64,
    #[serde(flatten)]
    pub simple: SimpleEntityTag,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleEntityTag {
    pub tag_id: i64,
}

impl Payload for SimpleEntityTag {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_id("tag_id", self.tag_id)
    }
}

/// Tags applied to an entity
#[derive(Debug, Clone)]
pub struct EntityTagService {
    svc: Service,
}

impl EntityTagService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        EntityTagService {
            svc: Service::new(rest, END_ENTITY_TAGS, "Entity Tag"),
        }
    }

    pub fn index(&self, camp_id: i64, ent_id: i64, sync: Option<&Time>) -> Result<List<EntityTag>> {
        self.svc.index(self.svc.entity(camp_id, ent_id), sync)
    }

    pub fn get(&self, camp_id: i64, ent_id: i64, link_id: i64) -> Result<EntityTag> {
        self.svc.get(self.svc.entity(camp_id, ent_id), link_id)
    }

    pub fn create(&self, camp_id: i64, ent_id: i64, link: &SimpleEntityTag) -> Result<EntityTag> {
        self.svc.create(self.svc.entity(camp_id, ent_id), link)
    }

    pub fn update(
        &self,
        camp_id: i64,
        ent_id: i64,
        link_id: i64,
        link: &SimpleEntityTag,
    ) -> Result<EntityTag> {
        self.svc.update(self.svc.entity(camp_id, ent_id), link_id, link)
    }

    pub fn delete(&self, camp_id: i64, ent_id: i64, link_id: i64) -> Result<()> {
        self.svc.delete(self.svc.entity(camp_id, ent_id), link_id)
    }
}
