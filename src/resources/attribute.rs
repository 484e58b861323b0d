use super::Audit;
use crate::endpoint::END_ATTRIBUTES;
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A key/value attribute attached to an entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    pub id: i64,
    pub entity_id: i64,
    #[serde(flatten)]
    pub simple: SimpleAttribute,
    /// Key usable in dice roll formulas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleAttribute {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_order: Option<i64>,
    /// Empty for plain text, or one of "section", "checkbox", "block"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Pinned on the entity's overview
    pub is_star: bool,
    pub is_private: bool,
}

impl Payload for SimpleAttribute {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

/// Attributes of an entity
#[derive(Debug, Clone)]
pub struct AttributeService {
    svc: Service,
}

impl AttributeService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        AttributeService {
            svc: Service::new(rest, END_ATTRIBUTES, "Attribute"),
        }
    }

    pub fn index(&self, camp_id: i64, ent_id: i64, sync: Option<&Time>) -> Result<List<Attribute>> {
        self.svc.index(self.svc.entity(camp_id, ent_id), sync)
    }

    pub fn get(&self, camp_id: i64, ent_id: i64, attr_id: i64) -> Result<Attribute> {
        self.svc.get(self.svc.entity(camp_id, ent_id), attr_id)
    }

    pub fn create(&self, camp_id: i64, ent_id: i64, attr: &SimpleAttribute) -> Result<Attribute> {
        self.svc.create(self.svc.entity(camp_id, ent_id), attr)
    }

    pub fn update(
        &self,
        camp_id: i64,
        ent_id: i64,
        attr_id: i64,
        attr: &SimpleAttribute,
    ) -> Result<Attribute> {
        self.svc.update(self.svc.entity(camp_id, ent_id), attr_id, attr)
    }

    pub fn delete(&self, camp_id: i64, ent_id: i64, attr_id: i64) -> Result<()> {
        self.svc.delete(self.svc.entity(camp_id, ent_id), attr_id)
    }
}
