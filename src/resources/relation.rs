use super::Audit;
use crate::endpoint::END_RELATIONS;
use crate::error::{Result, ValidationError};
use crate::payload::{check_len, check_range, require_id, require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Longest relation description the API stores
pub const MAX_RELATION_LEN: usize = 255;
pub const MIN_ATTITUDE: i64 = -100;
pub const MAX_ATTITUDE: i64 = 100;

/// A directed relation from the owning entity to a target entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relation {
    pub id: i64,
    /// Entity the relation starts from
    pub owner_id: i64,
    #[serde(flatten)]
    pub simple: SimpleRelation,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleRelation {
    /// Short description, e.g. "Father"
    pub relation: String,
    pub target_id: i64,
    /// From -100 (hostile) to 100 (devoted)
    pub attitude: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    /// Also create the mirrored relation on the target
    pub two_way: bool,
    pub is_star: bool,
    pub is_private: bool,
}

impl Payload for SimpleRelation {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("relation", &self.relation)?;
        check_len("relation", &self.relation, MAX_RELATION_LEN)?;
        require_id("target_id", self.target_id)?;
        check_range("attitude", self.attitude, MIN_ATTITUDE, MAX_ATTITUDE)
    }
}

/// Relations of an entity
#[derive(Debug, Clone)]
pub struct RelationService {
    svc: Service,
}

impl RelationService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        RelationService {
            svc: Service::new(rest, END_RELATIONS, "Relation"),
        }
    }

    pub fn index(&self, camp_id: i64, ent_id: i64, sync: Option<&Time>) -> Result<List<Relation>> {
        self.svc.index(self.svc.entity(camp_id, ent_id), sync)
    }

    pub fn get(&self, camp_id: i64, ent_id: i64, rel_id: i64) -> Result<Relation> {
        self.svc.get(self.svc.entity(camp_id, ent_id), rel_id)
    }

    pub fn create(&self, camp_id: i64, ent_id: i64, rel: &SimpleRelation) -> Result<Relation> {
        self.svc.create(self.svc.entity(camp_id, ent_id), rel)
    }

    pub fn update(
        &self,
        camp_id: i64,
        ent_id: i64,
        rel_id: i64,
        rel: &SimpleRelation,
    ) -> Result<Relation> {
        self.svc.update(self.svc.entity(camp_id, ent_id), rel_id, rel)
    }

    pub fn delete(&self, camp_id: i64, ent_id: i64, rel_id: i64) -> Result<()> {
        self.svc.delete(self.svc.entity(camp_id, ent_id), rel_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::reencode;

    fn father() -> SimpleRelation {
        SimpleRelation {
            relation: "Father".into(),
            target_id: 12,
            attitude: 80,
            colour: Some("blue".into()),
            two_way: true,
            is_star: false,
            is_private: false,
        }
    }

    #[test]
    fn test_relation_round_trip() {
        let simple = father();
        let full: Relation = reencode(&simple);
        assert_eq!(full.simple, simple);
    }

    #[test]
    fn test_relation_attitude_bounds() {
        for attitude in [MIN_ATTITUDE, 0, MAX_ATTITUDE] {
            let rel = SimpleRelation { attitude, ..father() };
            assert!(rel.validate().is_ok(), "attitude {}", attitude);
        }

        for attitude in [MIN_ATTITUDE - 1, MAX_ATTITUDE + 1, i64::MIN, i64::MAX] {
            let rel = SimpleRelation { attitude, ..father() };
            assert!(
                matches!(
                    rel.validate(),
                    Err(ValidationError::OutOfRange { field: "attitude", .. })
                ),
                "attitude {}",
                attitude
            );
        }
    }

    #[test]
    fn test_relation_text_length() {
        let rel = SimpleRelation {
            relation: "a".repeat(MAX_RELATION_LEN),
            ..father()
        };
        assert!(rel.validate().is_ok());

        let rel = SimpleRelation {
            relation: "a".repeat(MAX_RELATION_LEN + 1),
            ..father()
        };
        assert_eq!(
            rel.validate(),
            Err(ValidationError::TooLong {
                field: "relation",
                len: 256,
                max: 255,
            })
        );
    }

    #[test]
    fn test_relation_requires_text_and_target() {
        let rel = SimpleRelation {
            relation: String::new(),
            ..father()
        };
        assert_eq!(
            rel.validate(),
            Err(ValidationError::Missing { field: "relation" })
        );

        let rel = SimpleRelation {
            target_id: 0,
            ..father()
        };
        assert_eq!(
            rel.validate(),
            Err(ValidationError::Missing { field: "target_id" })
        );
    }

    #[test]
    fn test_relation_payload_fails_before_encoding() {
        let rel = SimpleRelation {
            attitude: 150,
            ..father()
        };
        assert!(rel.to_payload().is_err());
    }
}
