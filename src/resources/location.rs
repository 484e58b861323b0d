use super::{EntityMeta, Related};
use crate::endpoint::END_LOCATIONS;
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A location as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(flatten)]
    pub simple: SimpleLocation,
    /// Path of the uploaded map image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    #[serde(flatten)]
    pub related: Related,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleLocation {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_location_id: Option<i64>,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<i64>,
}

impl Payload for SimpleLocation {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

/// Locations of a campaign
#[derive(Debug, Clone)]
pub struct LocationService {
    svc: Service,
}

impl LocationService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        LocationService {
            svc: Service::new(rest, END_LOCATIONS, "Location"),
        }
    }

    pub fn index(&self, camp_id: i64, sync: Option<&Time>) -> Result<List<Location>> {
        self.svc.index(self.svc.campaign(camp_id), sync)
    }

    pub fn get(&self, camp_id: i64, loc_id: i64) -> Result<Location> {
        self.svc.get(self.svc.campaign(camp_id), loc_id)
    }

    pub fn create(&self, camp_id: i64, loc: &SimpleLocation) -> Result<Location> {
        self.svc.create(self.svc.campaign(camp_id), loc)
    }

    pub fn update(&self, camp_id: i64, loc_id: i64, loc: &SimpleLocation) -> Result<Location> {
        self.svc.update(self.svc.campaign(camp_id), loc_id, loc)
    }

    pub fn delete(&self, camp_id: i64, loc_id: i64) -> Result<()> {
        self.svc.delete(self.svc.campaign(camp_id), loc_id)
    }
}
