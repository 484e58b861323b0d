use super::{EntityMeta, Related};
use crate::endpoint::END_RACES;
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
pub struct Race {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(flatten)]
    pub simple: SimpleRace,
    #[serde(flatten)]
    pub related: Related,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleRace {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Parent race
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_id: Option<i64>,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<i64>,
}

impl Payload for SimpleRace {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

/// Races of a campaign
#[derive(Debug, Clone)]
pub struct RaceService {
    svc: Service,
}

impl RaceService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        RaceService {
            svc: Service::new(rest, END_RACES, "Race"),
        }
    }

    pub fn index(&self, camp_id: i64, sync: Option<&Time>) -> Result<List<Race>> {
        self.svc.index(self.svc.campaign(camp_id), sync)
    }

    pub fn get(&self, camp_id: i64, race_id: i64) -> Result<Race> {
        self.svc.get(self.svc.campaign(camp_id), race_id)
    }

    pub fn create(&self, camp_id: i64, race: &SimpleRace) -> Result<Race> {
        self.svc.create(self.svc.campaign(camp_id), race)
    }

    pub fn update(&self, camp_id: i64, race_id: i64, race: &SimpleRace) -> Result<Race> {
        self.svc.update(self.svc.campaign(camp_id), race_id, race)
    }

    pub fn delete(&self, camp_id: i64, race_id: i64) -> Result<()> {
        self.svc.delete(self.svc.campaign(camp_id), race_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::reencode;

    #[test]
    fn test_race_round_trip() {
        let simple = SimpleRace {
            name: "High Elf".into(),
            entry: Some("Long-lived.".into()),
            kind: None,
            race_id: Some(1),
            is_private: false,
            tags: vec![],
        };
        let full: Race = reencode(&simple);
        assert_eq!(full.simple, simple);
    }
}
