use super::Audit;
use crate::endpoint::{Endpoint, END_ORGANIZATIONS, END_ORGANIZATION_MEMBERS};
use crate::error::{Result, ValidationError};
use crate::payload::{require_id, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Membership of a character in an organisation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationMember {
    pub id: i64,
    pub organisation_id: i64,
    #[serde(flatten)]
    pub simple: SimpleOrganizationMember,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleOrganizationMember {
    pub character_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub is_private: bool,
}

impl Payload for SimpleOrganizationMember {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_id("character_id", self.character_id)
    }
}

/// Members of an organisation
#[derive(Debug, Clone)]
pub struct OrganizationMemberService {
    svc: Service,
}

impl OrganizationMemberService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        OrganizationMemberService {
            svc: Service::new(rest, END_ORGANIZATION_MEMBERS, "Organization Member"),
        }
    }

    fn base(&self, camp_id: i64, org_id: i64) -> Result<Endpoint> {
        self.svc.nested(camp_id, &END_ORGANIZATIONS, "Organization", org_id)
    }

    pub fn index(
        &self,
        camp_id: i64,
        org_id: i64,
        sync: Option<&Time>,
    ) -> Result<List<OrganizationMember>> {
        self.svc.index(self.base(camp_id, org_id), sync)
    }

    pub fn get(&self, camp_id: i64, org_id: i64, mem_id: i64) -> Result<OrganizationMember> {
        self.svc.get(self.base(camp_id, org_id), mem_id)
    }

    pub fn create(
        &self,
        camp_id: i64,
        org_id: i64,
        mem: &SimpleOrganizationMember,
    ) -> Result<OrganizationMember> {
        self.svc.create(self.base(camp_id, org_id), mem)
    }

    pub fn update(
        &self,
        camp_id: i64,
        org_id: i64,
        mem_id: i64,
        mem: &SimpleOrganizationMember,
    ) -> Result<OrganizationMember> {
        self.svc.update(self.base(camp_id, org_id), mem_id, mem)
    }

    pub fn delete(&self, camp_id: i64, org_id: i64, mem_id: i64) -> Result<()> {
        self.svc.delete(self.base(camp_id, org_id), mem_id)
    }
}
