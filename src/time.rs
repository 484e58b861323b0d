use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Deref;

/// Timestamp as exchanged with the Kanka API.
///
/// The API emits RFC 3339 strings with microseconds (`2019-03-12T20:47:58.000000Z`)
/// but older records may still carry a plain `YYYY-MM-DD HH:MM:SS`, which is read as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub DateTime<Utc>);

const LEGACY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Time {
    /// Create a new Time from a DateTime
    pub fn new(dt: DateTime<Utc>) -> Self {
        Time(dt)
    }

    /// The current instant
    pub fn now() -> Self {
        Time(Utc::now())
    }

    /// Parse either timestamp form accepted by the API
    pub fn parse(s: &str) -> Option<Self> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Time(dt.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(s, LEGACY_FORMAT)
            .ok()
            .map(|naive| Time(naive.and_utc()))
    }

    /// Render the timestamp the way the API writes it
    pub fn to_api_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    /// Value of the `lastSync` query parameter for this instant
    pub fn sync_param(&self) -> String {
        self.to_api_string()
    }
}

impl Deref for Time {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(dt: DateTime<Utc>) -> Self {
        Time(dt)
    }
}

impl From<Time> for DateTime<Utc> {
    fn from(t: Time) -> Self {
        t.0
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_api_string())
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_api_string())
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Time::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {:?}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_time_serialization() {
        let time = Time::new(Utc.with_ymd_and_hms(2019, 3, 12, 20, 47, 58).unwrap());
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, r#""2019-03-12T20:47:58.000000Z""#);
    }

    #[test]
    fn test_time_deserialization() {
        let time: Time = serde_json::from_str(r#""2019-03-12T20:47:58.123456Z""#).unwrap();
        assert_eq!(time.timestamp(), 1552423678);
        assert_eq!(time.nanosecond(), 123_456_000);
    }

    #[test]
    fn test_time_legacy_format() {
        let time: Time = serde_json::from_str(r#""2019-03-12 20:47:58""#).unwrap();
        assert_eq!(time.timestamp(), 1552423678);
    }

    #[test]
    fn test_time_invalid() {
        let result: Result<Time, _> = serde_json::from_str(r#""yesterday""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_time_null() {
        let result: Result<Option<Time>, _> = serde_json::from_str("null");
        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_sync_param() {
        let time = Time::new(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(time.sync_param(), "2020-01-02T03:04:05.000000Z");
    }
}
