use super::{EntityMeta, Related};
use crate::endpoint::END_CALENDARS;
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An in-world calendar as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calendar {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(flatten)]
    pub simple: SimpleCalendar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasons: Option<Vec<CalendarSeason>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moons: Option<Vec<CalendarMoon>>,
    #[serde(flatten)]
    pub related: Related,
}

/// The user-settable fields of a calendar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleCalendar {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Current date, `year-month-day`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Appended to years, e.g. "AD"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub months: Vec<CalendarMonth>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub weekdays: Vec<String>,
    pub has_leap_year: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leap_year_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leap_year_month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leap_year_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leap_year_start: Option<i64>,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarMonth {
    pub name: String,
    pub length: i64,
    /// "standard" or "intercalary"
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSeason {
    pub name: String,
    pub month: i64,
    pub day: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarMoon {
    pub name: String,
    /// Days between two full moons
    pub fullmoon: f64,
    pub offset: i64,
    pub colour: String,
}

impl Payload for SimpleCalendar {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

/// Calendars of a campaign
#[derive(Debug, Clone)]
pub struct CalendarService {
    svc: Service,
}

impl CalendarService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        CalendarService {
            svc: Service::new(rest, END_CALENDARS, "Calendar"),
        }
    }

    pub fn index(&self, camp_id: i64, sync: Option<&Time>) -> Result<List<Calendar>> {
        self.svc.index(self.svc.campaign(camp_id), sync)
    }

    pub fn get(&self, camp_id: i64, cal_id: i64) -> Result<Calendar> {
        self.svc.get(self.svc.campaign(camp_id), cal_id)
    }

    pub fn create(&self, camp_id: i64, cal: &SimpleCalendar) -> Result<Calendar> {
        self.svc.create(self.svc.campaign(camp_id), cal)
    }

    pub fn update(&self, camp_id: i64, cal_id: i64, cal: &SimpleCalendar) -> Result<Calendar> {
        self.svc.update(self.svc.campaign(camp_id), cal_id, cal)
    }

    pub fn delete(&self, camp_id: i64, cal_id: i64) -> Result<()> {
        self.svc.delete(self.svc.campaign(camp_id), cal_id)
    }
}
