use super::Audit;
use crate::endpoint::END_ENTITY_INVENTORY;
use crate::error::{Result, ValidationError};
use crate::payload::{require_id, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An item held in an entity's inventory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityInventory {
    pub id: i64,
    pub entity_id: i64,
    #[serde(flatten)]
    pub simple: SimpleEntityInventory,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleEntityInventory {
    pub item_id: i64,
    pub amount: i64,
    /// Where the item is kept, e.g. "Backpack"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_equipped: bool,
    pub is_private: bool,
}

impl Payload for SimpleEntityInventory {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_id("item_id", self.item_id)
    }
}

/// Inventory of an entity
#[derive(Debug, Clone)]
pub struct EntityInventoryService {
    svc: Service,
}

impl EntityInventoryService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        EntityInventoryService {
            svc: Service::new(rest, END_ENTITY_INVENTORY, "Inventory"),
        }
    }

    pub fn index(
        &self,
        camp_id: i64,
        ent_id: i64,
        sync: Option<&Time>,
    ) -> Result<List<EntityInventory>> {
        self.svc.index(self.svc.entity(camp_id, ent_id), sync)
    }

    pub fn get(&self, camp_id: i64, ent_id: i64, inv_id: i64) -> Result<EntityInventory> {
        self.svc.get(self.svc.entity(camp_id, ent_id), inv_id)
    }

    pub fn create(
        &self,
        camp_id: i64,
        ent_id: i64,
        inv: &SimpleEntityInventory,
    ) -> Result<EntityInventory> {
        self.svc.create(self.svc.entity(camp_id, ent_id), inv)
    }

    pub fn update(
        &self,
        camp_id: i64,
        ent_id: i64,
        inv_id: i64,
        inv: &SimpleEntityInventory,
    ) -> Result<EntityInventory> {
        self.svc.update(self.svc.entity(camp_id, ent_id), inv_id, inv)
    }

    pub fn delete(&self, camp_id: i64, ent_id: i64, inv_id: i64) -> Result<()> {
        self.svc.delete(self.svc.entity(camp_id, ent_id), inv_id)
    }
}
