use super::{EntityMeta, Related};
use crate::endpoint::END_ITEMS;
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(flatten)]
    pub simple: SimpleItem,
    #[serde(flatten)]
    pub related: Related,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Free text, e.g. "25 gp"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    /// Owner of the item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_id: Option<i64>,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<i64>,
}

impl Payload for SimpleItem {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

/// Items of a campaign
#[derive(Debug, Clone)]
pub struct ItemService {
    svc: Service,
}

impl ItemService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        ItemService {
            svc: Service::new(rest, END_ITEMS, "Item"),
        }
    }

    pub fn index(&self, camp_id: i64, sync: Option<&Time>) -> Result<List<Item>> {
        self.svc.index(self.svc.campaign(camp_id), sync)
    }

    pub fn get(&self, camp_id: i64, item_id: i64) -> Result<Item> {
        self.svc.get(self.svc.campaign(camp_id), item_id)
    }

    pub fn create(&self, camp_id: i64, item: &SimpleItem) -> Result<Item> {
        self.svc.create(self.svc.campaign(camp_id), item)
    }

    pub fn update(&self, camp_id: i64, item_id: i64, item: &SimpleItem) -> Result<Item> {
        self.svc.update(self.svc.campaign(camp_id), item_id, item)
    }

    pub fn delete(&self, camp_id: i64, item_id: i64) -> Result<()> {
        self.svc.delete(self.svc.campaign(camp_id), item_id)
    }
}
