//! Characters, items, locations and organisations taking part in a quest.
//!
//! All four live under `campaigns/{c}/quests/{q}/` and share the same shape:
//! a reference to the involved record plus a description and a role.

use super::Audit;
use crate::endpoint::{
    Endpoint, END_QUESTS, END_QUEST_CHARACTERS, END_QUEST_ITEMS, END_QUEST_LOCATIONS,
    END_QUEST_ORGANIZATIONS,
};
use crate::error::{Result, ValidationError};
use crate::payload::{require_id, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// `campaigns/{camp_id}/quests/{quest_id}/{resource}`
fn quest_base(svc: &Service, camp_id: i64, quest_id: i64) -> Result<Endpoint> {
    svc.nested(camp_id, &END_QUESTS, "Quest", quest_id)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestCharacter {
    pub id: i64,
    pub quest_id: i64,
    #[serde(flatten)]
    pub simple: SimpleQuestCharacter,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleQuestCharacter {
    pub character_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub is_private: bool,
}

impl Payload for SimpleQuestCharacter {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_id("character_id", self.character_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestItem {
    pub id: i64,
    pub quest_id: i64,
    #[serde(flatten)]
    pub simple: SimpleQuestItem,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleQuestItem {
    pub item_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub is_private: bool,
}

impl Payload for SimpleQuestItem {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_id("item_id", self.item_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestLocation {
    pub id: i64,
    pub quest_id: i64,
    #[serde(flatten)]
    pub simple: SimpleQuestLocation,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleQuestLocation {
    pub location_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub is_private: bool,
}

impl Payload for SimpleQuestLocation {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_id("location_id", self.location_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestOrganization {
    pub id: i64,
    pub quest_id: i64,
    #[serde(flatten)]
    pub simple: SimpleQuestOrganization,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleQuestOrganization {
    pub organisation_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub is_private: bool,
}

impl Payload for SimpleQuestOrganization {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_id("organisation_id", self.organisation_id)
    }
}

/// Characters involved in a quest
#[derive(Debug, Clone)]
pub struct QuestCharacterService {
    svc: Service,
}

impl QuestCharacterService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        QuestCharacterService {
            svc: Service::new(rest, END_QUEST_CHARACTERS, "Quest Character"),
        }
    }

    pub fn index(
        &self,
        camp_id: i64,
        quest_id: i64,
        sync: Option<&Time>,
    ) -> Result<List<QuestCharacter>> {
        self.svc.index(quest_base(&self.svc, camp_id, quest_id), sync)
    }

    pub fn get(&self, camp_id: i64, quest_id: i64, qc_id: i64) -> Result<QuestCharacter> {
        self.svc.get(quest_base(&self.svc, camp_id, quest_id), qc_id)
    }

    pub fn create(
        &self,
        camp_id: i64,
        quest_id: i64,
        qc: &SimpleQuestCharacter,
    ) -> Result<QuestCharacter> {
        self.svc.create(quest_base(&self.svc, camp_id, quest_id), qc)
    }

    pub fn update(
        &self,
        camp_id: i64,
        quest_id: i64,
        qc_id: i64,
        qc: &SimpleQuestCharacter,
    ) -> Result<QuestCharacter> {
        self.svc.update(quest_base(&self.svc, camp_id, quest_id), qc_id, qc)
    }

    pub fn delete(&self, camp_id: i64, quest_id: i64, qc_id: i64) -> Result<()> {
        self.svc.delete(quest_base(&self.svc, camp_id, quest_id), qc_id)
    }
}

/// Items involved in a quest
#[derive(Debug, Clone)]
pub struct QuestItemService {
    svc: Service,
}

impl QuestItemService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        QuestItemService {
            svc: Service::new(rest, END_QUEST_ITEMS, "Quest Item"),
        }
    }

    pub fn index(
        &self,
        camp_id: i64,
        quest_id: i64,
        sync: Option<&Time>,
    ) -> Result<List<QuestItem>> {
        self.svc.index(quest_base(&self.svc, camp_id, quest_id), sync)
    }

    pub fn get(&self, camp_id: i64, quest_id: i64, qi_id: i64) -> Result<QuestItem> {
        self.svc.get(quest_base(&self.svc, camp_id, quest_id), qi_id)
    }

    pub fn create(&self, camp_id: i64, quest_id: i64, qi: &SimpleQuestItem) -> Result<QuestItem> {
        self.svc.create(quest_base(&self.svc, camp_id, quest_id), qi)
    }

    pub fn update(
        &self,
        camp_id: i64,
        quest_id: i64,
        qi_id: i64,
        qi: &SimpleQuestItem,
    ) -> Result<QuestItem> {
        self.svc.update(quest_base(&self.svc, camp_id, quest_id), qi_id, qi)
    }

    pub fn delete(&self, camp_id: i64, quest_id: i64, qi_id: i64) -> Result<()> {
        self.svc.delete(quest_base(&self.svc, camp_id, quest_id), qi_id)
    }
}

/// Locations involved in a quest
#[derive(Debug, Clone)]
pub struct QuestLocationService {
    svc: Service,
}

impl QuestLocationService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        QuestLocationService {
            svc: Service::new(rest, END_QUEST_LOCATIONS, "Quest Location"),
        }
    }

    pub fn index(
        &self,
        camp_id: i64,
        quest_id: i64,
        sync: Option<&Time>,
    ) -> Result<List<QuestLocation>> {
        self.svc.index(quest_base(&self.svc, camp_id, quest_id), sync)
    }

    pub fn get(&self, camp_id: i64, quest_id: i64, ql_id: i64) -> Result<QuestLocation> {
        self.svc.get(quest_base(&self.svc, camp_id, quest_id), ql_id)
    }

    pub fn create(
        &self,
        camp_id: i64,
        quest_id: i64,
        ql: &SimpleQuestLocation,
    ) -> Result<QuestLocation> {
        self.svc.create(quest_base(&self.svc, camp_id, quest_id), ql)
    }

    pub fn update(
        &self,
        camp_id: i64,
        quest_id: i64,
        ql_id: i64,
        ql: &SimpleQuestLocation,
    ) -> Result<QuestLocation> {
        self.svc.update(quest_base(&self.svc, camp_id, quest_id), ql_id, ql)
    }

    pub fn delete(&self, camp_id: i64, quest_id: i64, ql_id: i64) -> Result<()> {
        self.svc.delete(quest_base(&self.svc, camp_id, quest_id), ql_id)
    }
}

/// Organisations involved in a quest
#[derive(Debug, Clone)]
pub struct QuestOrganizationService {
    svc: Service,
}

impl QuestOrganizationService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        QuestOrganizationService {
            svc: Service::new(rest, END_QUEST_ORGANIZATIONS, "Quest Organization"),
        }
    }

    pub fn index(
        &self,
        camp_id: i64,
        quest_id: i64,
        sync: Option<&Time>,
    ) -> Result<List<QuestOrganization>> {
        self.svc.index(quest_base(&self.svc, camp_id, quest_id), sync)
    }

    pub fn get(&self, camp_id: i64, quest_id: i64, qo_id: i64) -> Result<QuestOrganization> {
        self.svc.get(quest_base(&self.svc, camp_id, quest_id), qo_id)
    }

    pub fn create(
        &self,
        camp_id: i64,
        quest_id: i64,
        qo: &SimpleQuestOrganization,
    ) -> Result<QuestOrganization> {
        self.svc.create(quest_base(&self.svc, camp_id, quest_id), qo)
    }

    pub fn update(
        &self,
        camp_id: i64,
        quest_id: i64,
        qo_id: i64,
        qo: &SimpleQuestOrganization,
    ) -> Result<QuestOrganization> {
        self.svc.update(quest_base(&self.svc, camp_id, quest_id), qo_id, qo)
    }

    pub fn delete(&self, camp_id: i64, quest_id: i64, qo_id: i64) -> Result<()> {
        self.svc.delete(quest_base(&self.svc, camp_id, quest_id), qo_id)
    }
}
