use super::{EntityMeta, Related};
use crate::endpoint::END_ORGANIZATIONS;
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An organisation (guild, cult, kingdom...) as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(flatten)]
    pub simple: SimpleOrganization,
    /// Number of members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<i64>,
    #[serde(flatten)]
    pub related: Related,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleOrganization {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Parent organisation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<i64>,
}

impl Payload for SimpleOrganization {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone)]
pub struct OrganizationService {
    svc: Service,
}

impl OrganizationService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        OrganizationService {
            svc: Service::new(rest, END_ORGANIZATIONS, "Organization"),
        }
    }

    pub fn index(&self, camp_id: i64, sync: Option<&Time>) -> Result<List<Organization>> {
        self.svc.index(self.svc.campaign(camp_id), sync)
    }

    pub fn get(&self, camp_id: i64, org_id: i64) -> Result<Organization> {
        self.svc.get(self.svc.campaign(camp_id), org_id)
    }

    pub fn create(&self, camp_id: i64, org: &SimpleOrganization) -> Result<Organization> {
        self.svc.create(self.svc.campaign(camp_id), org)
    }

    pub fn update(
        &self,
        camp_id: i64,
        org_id: i64,
        org: &SimpleOrganization,
    ) -> Result<Organization> {
        self.svc.update(self.svc.campaign(camp_id), org_id, org)
    }

    pub fn delete(&self, camp_id: i64, org_id: i64) -> Result<()> {
        self.svc.delete(self.svc.campaign(camp_id), org_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::reencode;

    #[test]
    fn test_organization_round_trip() {
        let simple = SimpleOrganization {
            name: "Merchants Guild".into(),
            entry: Some("Trade.".into()),
            kind: Some("Guild".into()),
            organisation_id: Some(1),
            location_id: Some(2),
            is_private: false,
            tags: vec![3, 4],
        };
        let full: Organization = reencode(&simple);
        assert_eq!(full.simple, simple);
    }

    #[test]
    fn test_organization_payload_requires_name() {
        let org = SimpleOrganization {
            kind: Some("Guild".into()),
            ..Default::default()
        };
        assert!(org.to_payload().is_err());
    }
}
