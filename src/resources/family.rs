use super::{EntityMeta, Related};
use crate::endpoint::END_FAMILIES;
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
pub struct Family {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(flatten)]
    pub simple: SimpleFamily,
    /// IDs of the member characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<i64>>,
    #[serde(flatten)]
    pub related: Related,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleFamily {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    /// Parent family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_id: Option<i64>,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<i64>,
}

impl Payload for SimpleFamily {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

/// Families of a campaign
#[derive(Debug, Clone)]
pub struct FamilyService {
    svc: Service,
}

impl FamilyService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        FamilyService {
            svc: Service::new(rest, END_FAMILIES, "Family"),
        }
    }

    pub fn index(&self, camp_id: i64, sync: Option<&Time>) -> Result<List<Family>> {
        self.svc.index(self.svc.campaign(camp_id), sync)
    }

    pub fn get(&self, camp_id: i64, fam_id: i64) -> Result<Family> {
        self.svc.get(self.svc.campaign(camp_id), fam_id)
    }

    pub fn create(&self, camp_id: i64, fam: &SimpleFamily) -> Result<Family> {
        self.svc.create(self.svc.campaign(camp_id), fam)
    }

    pub fn update(&self, camp_id: i64, fam_id: i64, fam: &SimpleFamily) -> Result<Family> {
        self.svc.update(self.svc.campaign(camp_id), fam_id, fam)
    }

    pub fn delete(&self, camp_id: i64, fam_id: i64) -> Result<()> {
        self.svc.delete(self.svc.campaign(camp_id), fam_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::reencode;

    #[test]
    fn test_family_members() {
        let json = r#"{"id": 2, "name": "Adams", "family_id": 1, "members": [3, 8]}"#;
        let fam: Family = serde_json::from_str(json).unwrap();
        assert_eq!(fam.simple.family_id, Some(1));
        assert_eq!(fam.members, Some(vec![3, 8]));
    }

    #[test]
    fn test_family_round_trip() {
        let simple = SimpleFamily {
            name: "Adams".into(),
            entry: None,
            location_id: Some(3),
            family_id: Some(1),
            is_private: true,
            tags: vec![],
        };
        let full: Family = reencode(&simple);
        assert_eq!(full.simple, simple);
    }

    #[test]
    fn test_family_payload_requires_name() {
        assert!(SimpleFamily::default().validate().is_err());
    }
}
