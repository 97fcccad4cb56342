//! Calendar events and the category palette

use crate::domain::schedule::TimeOfDay;
use crate::error::{AmityError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Built-in category labels with their default display colors
pub const CATEGORY_PALETTE: [(&str, &str); 11] = [
    ("Contact", "#22c55e"),
    ("Teaching", "#f59e0b"),
    ("Finding", "#a855f7"),
    ("Meeting", "#ef4444"),
    ("Study or Plan", "#8b5cf6"),
    ("Service", "#1e40af"),
    ("Baptism", "#06b6d4"),
    ("Travel", "#991b1b"),
    ("Meal", "#92400e"),
    ("Other", "#6b7280"),
    ("Task", "#a16207"),
];

/// Default color for a category label; unknown labels get the "Other" gray
pub fn default_color(category: &str) -> &'static str {
    CATEGORY_PALETTE
        .iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(category))
        .map(|(_, color)| *color)
        .unwrap_or("#6b7280")
}

/// A planned calendar event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(rename = "type")]
    pub category: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_notes: Option<String>,
}

impl CalendarEvent {
    /// Whether this event falls on the given UTC calendar date
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date.date_naive() == date
    }

    /// Start time parsed, or the 9:00 AM fallback used by the day view
    pub fn start(&self) -> Result<TimeOfDay> {
        self.start_time.as_deref().unwrap_or("9:00 AM").parse()
    }

    /// End time parsed, or the 10:00 AM fallback used by the day view
    pub fn end(&self) -> Result<TimeOfDay> {
        self.end_time.as_deref().unwrap_or("10:00 AM").parse()
    }
}

/// Parse and validate a start/end time pair from user input.
///
/// Each string must be a well-formed 12-hour time, and when both are given
/// the start must come strictly before the end. Stored data is never run
/// through this - the day view clamps instead.
pub fn parse_time_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(Option<TimeOfDay>, Option<TimeOfDay>)> {
    let start = start.map(str::parse).transpose()?;
    let end = end.map(str::parse).transpose()?;

    if let (Some(s), Some(e)) = (start, end) {
        if s >= e {
            return Err(AmityError::InvalidTime(format!(
                "start '{}' must be before end '{}'",
                s, e
            )));
        }
    }

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event() -> CalendarEvent {
        CalendarEvent {
            id: "1".to_string(),
            title: "Lunch".to_string(),
            date: Utc.with_ymd_and_hms(2025, 1, 17, 0, 0, 0).unwrap(),
            start_time: Some("12:00 PM".to_string()),
            end_time: Some("1:00 PM".to_string()),
            category: "Meal".to_string(),
            color: "#92400e".to_string(),
            notes: None,
            pre_notes: None,
            post_notes: None,
        }
    }

    #[test]
    fn test_default_colors() {
        assert_eq!(default_color("Contact"), "#22c55e");
        assert_eq!(default_color("meal"), "#92400e");
        assert_eq!(default_color("Something Else"), "#6b7280");
    }

    #[test]
    fn test_is_on_compares_calendar_date() {
        let e = event();
        assert!(e.is_on(NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()));
        assert!(!e.is_on(NaiveDate::from_ymd_opt(2025, 1, 18).unwrap()));
    }

    #[test]
    fn test_start_end_fall_back_when_missing() {
        let mut e = event();
        e.start_time = None;
        e.end_time = None;
        assert_eq!(e.start().unwrap().hour_offset(), 9.0);
        assert_eq!(e.end().unwrap().hour_offset(), 10.0);
    }

    #[test]
    fn test_parse_time_range_valid() {
        let (start, end) = parse_time_range(Some("9:00 AM"), Some("10:30 AM")).unwrap();
        assert_eq!(start.unwrap().hour_offset(), 9.0);
        assert_eq!(end.unwrap().hour_offset(), 10.5);
    }

    #[test]
    fn test_parse_time_range_rejects_inverted() {
        let result = parse_time_range(Some("2:00 PM"), Some("1:00 PM"));
        assert!(matches!(result, Err(AmityError::InvalidTime(_))));
    }

    #[test]
    fn test_parse_time_range_rejects_equal() {
        let result = parse_time_range(Some("2:00 PM"), Some("2:00 PM"));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_time_range_allows_partial() {
        let (start, end) = parse_time_range(Some("2:00 PM"), None).unwrap();
        assert!(start.is_some());
        assert!(end.is_none());
    }

    #[test]
    fn test_event_json_uses_original_field_names() {
        let json = serde_json::to_string(&event()).unwrap();
        assert!(json.contains("\"type\":\"Meal\""));
        assert!(json.contains("\"startTime\":\"12:00 PM\""));
        assert!(json.contains("\"endTime\":\"1:00 PM\""));

        let back: CalendarEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event());
    }
}
