use super::Audit;
use crate::endpoint::{Endpoint, END_LOCATIONS, END_MAP_POINTS};
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A marker placed on a location's map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapPoint {
    pub id: i64,
    /// Location whose map holds the point
    pub location_id: i64,
    #[serde(flatten)]
    pub simple: SimpleMapPoint,
    #[serde(flatten)]
    pub audit: Audit,
}

/// The user-settable fields of a map point.
///
/// A point either links to an entity or carries its own label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleMapPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_entity_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub axis_x: i64,
    pub axis_y: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// "circle" or "square"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    /// "small", "standard" or "large"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl Payload for SimpleMapPoint {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.target_entity_id.is_some() {
            return Ok(());
        }
        require_text("name", self.name.as_deref().unwrap_or_default())
    }
}

/// Map points of a location
#[derive(Debug, Clone)]
pub struct MapPointService {
    svc: Service,
}

impl MapPointService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        MapPointService {
            svc: Service::new(rest, END_MAP_POINTS, "Map Point"),
        }
    }

    fn base(&self, camp_id: i64, loc_id: i64) -> Result<Endpoint> {
        self.svc.nested(camp_id, &END_LOCATIONS, "Location", loc_id)
    }

    pub fn index(&self, camp_id: i64, loc_id: i64, sync: Option<&Time>) -> Result<List<MapPoint>> {
        self.svc.index(self.base(camp_id, loc_id), sync)
    }

    pub fn get(&self, camp_id: i64, loc_id: i64, point_id: i64) -> Result<MapPoint> {
        self.svc.get(self.base(camp_id, loc_id), point_id)
    }

    pub fn create(&self, camp_id: i64, loc_id: i64, point: &SimpleMapPoint) -> Result<MapPoint> {
        self.svc.create(self.base(camp_id, loc_id), point)
    }

    pub fn update(
        &self,
        camp_id: i64,
        loc_id: i64,
        point_id: i64,
        point: &SimpleMapPoint,
    ) -> Result<MapPoint> {
        self.svc.update(self.base(camp_id, loc_id), point_id, point)
    }

    pub fn delete(&self, camp_id: i64, loc_id: i64, point_id: i64) -> Result<()> {
        self.svc.delete(self.base(camp_id, loc_id), point_id)
    }
}
