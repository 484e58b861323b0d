//! Path algebra for Kanka API endpoints.
//!
//! An [`Endpoint`] is a relative path such as `campaigns/5272/characters`.
//! Every operation returns a new value and leaves the receiver untouched.

use crate::error::{KankaError, Result};
use crate::time::Time;
use std::borrow::Cow;
use std::fmt;

/// Name of the query parameter carrying the "changed since" filter
pub const SYNC_PARAM: &str = "lastSync";

/// A relative API path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(Cow<'static, str>);

impl Endpoint {
    /// Endpoint for a fixed path, usable in `const` items
    pub const fn from_static(path: &'static str) -> Self {
        Endpoint(Cow::Borrowed(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a literal segment
    pub fn append(&self, segment: &str) -> Endpoint {
        Endpoint(Cow::Owned(format!("{}{}", self.0, segment)))
    }

    /// Append `/` followed by the decimal ID; negative IDs are rejected
    pub fn with_id(&self, id: i64) -> Result<Endpoint> {
        if id < 0 {
            return Err(KankaError::InvalidId { id });
        }
        Ok(self.append(&format!("/{}", id)))
    }

    /// Append another endpoint as a sub-path
    pub fn concat(&self, other: &Endpoint) -> Endpoint {
        self.append(&format!("/{}", other.0))
    }

    /// Restrict the result to resources changed since the given instant
    pub fn with_since(&self, since: &Time) -> Endpoint {
        let sep = if self.0.contains('?') { '&' } else { '?' };
        self.append(&format!("{}{}={}", sep, SYNC_PARAM, since.sync_param()))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Endpoint {
    fn from(s: String) -> Self {
        Endpoint(Cow::Owned(s))
    }
}

pub(crate) const END_PROFILE: Endpoint = Endpoint::from_static("profile");
pub(crate) const END_CAMPAIGNS: Endpoint = Endpoint::from_static("campaigns");
pub(crate) const END_ENTITIES: Endpoint = Endpoint::from_static("entities");
pub(crate) const END_CHARACTERS: Endpoint = Endpoint::from_static("characters");
pub(crate) const END_LOCATIONS: Endpoint = Endpoint::from_static("locations");
pub(crate) const END_FAMILIES: Endpoint = Endpoint::from_static("families");
pub(crate) const END_ORGANIZATIONS: Endpoint = Endpoint::from_static("organisations");
pub(crate) const END_ITEMS: Endpoint = Endpoint::from_static("items");
pub(crate) const END_NOTES: Endpoint = Endpoint::from_static("notes");
pub(crate) const END_EVENTS: Endpoint = Endpoint::from_static("events");
pub(crate) const END_CALENDARS: Endpoint = Endpoint::from_static("calendars");
pub(crate) const END_RACES: Endpoint = Endpoint::from_static("races");
pub(crate) const END_QUESTS: Endpoint = Endpoint::from_static("quests");
pub(crate) const END_JOURNALS: Endpoint = Endpoint::from_static("journals");
pub(crate) const END_TAGS: Endpoint = Endpoint::from_static("tags");
pub(crate) const END_CONVERSATIONS: Endpoint = Endpoint::from_static("conversations");
pub(crate) const END_DICE_ROLLS: Endpoint = Endpoint::from_static("dice_rolls");
pub(crate) const END_ATTRIBUTES: Endpoint = Endpoint::from_static("attributes");
pub(crate) const END_ENTITY_EVENTS: Endpoint = Endpoint::from_static("entity_events");
pub(crate) const END_ENTITY_FILES: Endpoint = Endpoint::from_static("entity_files");
pub(crate) const END_ENTITY_INVENTORY: Endpoint = Endpoint::from_static("inventory");
pub(crate) const END_ENTITY_NOTES: Endpoint = Endpoint::from_static("entity_notes");
pub(crate) const END_ENTITY_TAGS: Endpoint = Endpoint::from_static("entity_tags");
pub(crate) const END_RELATIONS: Endpoint = Endpoint::from_static("relations");
pub(crate) const END_MAP_POINTS: Endpoint = Endpoint::from_static("map_points");
pub(crate) const END_ORGANIZATION_MEMBERS: Endpoint =
    Endpoint::from_static("organisation_members");
pub(crate) const END_QUEST_CHARACTERS: Endpoint = Endpoint::from_static("quest_characters");
pub(crate) const END_QUEST_ITEMS: Endpoint = Endpoint::from_static("quest_items");
pub(crate) const END_QUEST_LOCATIONS: Endpoint = Endpoint::from_static("quest_locations");
pub(crate) const END_QUEST_ORGANIZATIONS: Endpoint =
    Endpoint::from_static("quest_organisations");
pub(crate) const END_SEARCH: Endpoint = Endpoint::from_static("search");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_append() {
        let end = Endpoint::from_static("campaigns").append("/search");
        assert_eq!(end.as_str(), "campaigns/search");
    }

    #[test]
    fn test_with_id() {
        for id in [0, 1, 5272, i64::MAX] {
            let end = END_CAMPAIGNS.with_id(id).unwrap();
            assert_eq!(end.as_str(), format!("campaigns/{}", id));
        }
    }

    #[test]
    fn test_with_negative_id() {
        for id in [-1, -123, i64::MIN] {
            let err = END_CAMPAIGNS.with_id(id).unwrap_err();
            assert!(matches!(err, KankaError::InvalidId { id: got } if got == id));
        }
        assert_eq!(END_CAMPAIGNS.as_str(), "campaigns");
    }

    #[test]
    fn test_concat() {
        let end = END_CAMPAIGNS
            .with_id(5272)
            .unwrap()
            .concat(&END_ENTITIES)
            .with_id(10)
            .unwrap()
            .concat(&END_ATTRIBUTES);
        assert_eq!(end.as_str(), "campaigns/5272/entities/10/attributes");
    }

    #[test]
    fn test_with_since() {
        let since = Time::new(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap());
        let end = END_CAMPAIGNS.with_since(&since);
        assert_eq!(
            end.as_str(),
            "campaigns?lastSync=2020-01-02T03:04:05.000000Z"
        );

        let twice = end.with_since(&since);
        assert!(twice.as_str().contains("&lastSync="));
    }

    #[test]
    fn test_receiver_unchanged() {
        let base = END_CHARACTERS.clone();
        let _ = base.with_id(3).unwrap();
        let _ = base.append("x");
        assert_eq!(base, END_CHARACTERS);
    }
}
