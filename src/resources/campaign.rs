use crate::endpoint::END_CAMPAIGNS;
use crate::error::{Result, ResultExt};
use crate::response::{DataEnvelope, List, ListEnvelope};
use crate::rest::RestContext;
use crate::service::campaign_root;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A campaign the authenticated user belongs to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    pub locale: Option<String>,
    pub entry: Option<String>,
    pub image: Option<String>,
    pub image_full: Option<String>,
    pub image_thumb: Option<String>,
    /// "public" or "private"
    pub visibility: Option<String>,
    pub created_at: Option<Time>,
    pub updated_at: Option<Time>,
    pub members: Option<Vec<CampaignMember>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignMember {
    pub id: i64,
    pub user: CampaignUser,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignUser {
    pub id: i64,
    pub name: String,
    pub avatar: Option<String>,
}

/// Campaigns of the authenticated user.
///
/// Only the first page of campaigns is returned.
#[derive(Debug, Clone)]
pub struct CampaignService {
    rest: Arc<RestContext>,
}

impl CampaignService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        CampaignService { rest }
    }

    pub fn index(&self, sync: Option<&Time>) -> Result<List<Campaign>> {
        let end = match sync {
            Some(since) => END_CAMPAIGNS.with_since(since),
            None => END_CAMPAIGNS,
        };

        self.rest
            .get::<ListEnvelope<Campaign>>(&end)
            .and_then(ListEnvelope::into_list)
            .context(|| "cannot index Campaigns")
    }

    pub fn get(&self, camp_id: i64) -> Result<Campaign> {
        campaign_root(camp_id)
            .and_then(|end| self.rest.get::<DataEnvelope<Campaign>>(&end))
            .and_then(DataEnvelope::into_data)
            .context(|| format!("cannot get Campaign (ID: {})", camp_id))
    }
}
