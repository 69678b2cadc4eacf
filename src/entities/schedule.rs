use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::Record;

/// A shooting day on the production calendar.
///
/// `reminder_minutes` is read by whatever schedules call-time notifications;
/// the store only keeps it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[record(key = "schedule", name = "Schedule")]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// 24h `HH:MM`.
    #[serde(default)]
    pub call_time: Option<String>,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub scene_ids: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub reminder_minutes: Option<u32>,
}

impl ScheduleDay {
    /// Calendar order. ISO dates and zero-padded times sort lexically; a day
    /// without a call time sorts first on its date.
    pub fn calendar_order(a: &ScheduleDay, b: &ScheduleDay) -> Ordering {
        a.date
            .cmp(&b.date)
            .then_with(|| a.call_time.cmp(&b.call_time))
    }
}
