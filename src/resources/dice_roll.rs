use super::{EntityMeta, Related};
use crate::endpoint::END_DICE_ROLLS;
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A saved dice roll formula
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceRoll {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(flatten)]
    pub simple: SimpleDiceRoll,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(flatten)]
    pub related: Related,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleDiceRoll {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    /// Character whose attributes fill the formula
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_id: Option<i64>,
    /// Roll formula, e.g. `1d20+{character.strength}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<i64>,
}

impl Payload for SimpleDiceRoll {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

/// Dice rolls of a campaign
#[derive(Debug, Clone)]
pub struct DiceRollService {
    svc: Service,
}

impl DiceRollService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        DiceRollService {
            svc: Service::new(rest, END_DICE_ROLLS, "Dice Roll"),
        }
    }

    pub fn index(&self, camp_id: i64, sync: Option<&Time>) -> Result<List<DiceRoll>> {
        self.svc.index(self.svc.campaign(camp_id), sync)
    }

    pub fn get(&self, camp_id: i64, roll_id: i64) -> Result<DiceRoll> {
        self.svc.get(self.svc.campaign(camp_id), roll_id)
    }

    pub fn create(&self, camp_id: i64, roll: &SimpleDiceRoll) -> Result<DiceRoll> {
        self.svc.create(self.svc.campaign(camp_id), roll)
    }

    pub fn update(&self, camp_id: i64, roll_id: i64, roll: &SimpleDiceRoll) -> Result<DiceRoll> {
        self.svc.update(self.svc.campaign(camp_id), roll_id, roll)
    }

    pub fn delete(&self, camp_id: i64, roll_id: i64) -> Result<()> {
        self.svc.delete(self.svc.campaign(camp_id), roll_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::reencode;

    #[test]
    fn test_dice_roll_round_trip() {
        let simple = SimpleDiceRoll {
            name: "Attack".into(),
            entry: None,
            character_id: Some(4),
            parameters: Some("1d20+{character.strength}".into()),
            is_private: false,
            tags: vec![],
        };
        let full: DiceRoll = reencode(&simple);
        assert_eq!(full.simple, simple);
    }
}
