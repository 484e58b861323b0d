use crate::endpoint::END_PROFILE;
use crate::error::{Result, ResultExt};
use crate::response::DataEnvelope;
use crate::rest::RestContext;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The account owning the access token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub avatar: Option<String>,
    pub avatar_thumb: Option<String>,
    pub locale: Option<String>,
    pub timezone: Option<String>,
    pub date_format: Option<String>,
    pub default_pagination: Option<i64>,
    pub last_campaign_id: Option<i64>,
    pub is_patreon: bool,
}

#[derive(Debug, Clone)]
pub struct ProfileService {
    rest: Arc<RestContext>,
}

impl ProfileService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        ProfileService { rest }
    }

    /// Fetch the profile of the authenticated user
    pub fn get(&self) -> Result<Profile> {
        self.rest
            .get::<DataEnvelope<Profile>>(&END_PROFILE)
            .and_then(DataEnvelope::into_data)
            .context(|| "cannot get Profile")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_api() {
        let json = r#"{
            "id": 1,
            "name": "Ilestis",
            "avatar": "/images/defaults/user.svg",
            "avatar_thumb": "/images/defaults/user.svg",
            "locale": "en",
            "timezone": "UTC",
            "date_format": "Y-m-d",
            "default_pagination": 15,
            "last_campaign_id": 1,
            "is_patreon": true
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Ilestis");
        assert_eq!(profile.default_pagination, Some(15));
        assert!(profile.is_patreon);
    }
}
