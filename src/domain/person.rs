//! Contact records and the relationship-status dot palette

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relationship-status tag attached to a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DotColor {
    #[default]
    Yellow,
    Green,
    LightBlue,
    DarkBlue,
    Purple,
    Gray,
    Red,
}

impl DotColor {
    /// Legend ordering for display and counts
    pub const ALL: [DotColor; 7] = [
        DotColor::Yellow,
        DotColor::Green,
        DotColor::LightBlue,
        DotColor::DarkBlue,
        DotColor::Purple,
        DotColor::Gray,
        DotColor::Red,
    ];

    /// Human-readable legend label
    pub fn label(&self) -> &'static str {
        match self {
            DotColor::Yellow => "New Contact",
            DotColor::Green => "Dating",
            DotColor::LightBlue => "Engaged",
            DotColor::DarkBlue => "Married",
            DotColor::Purple => "Friend",
            DotColor::Gray => "Inactive",
            DotColor::Red => "Avoid",
        }
    }

    /// Display color as a hex string
    pub fn hex(&self) -> &'static str {
        match self {
            DotColor::Yellow => "#eab308",
            DotColor::Green => "#22c55e",
            DotColor::LightBlue => "#06b6d4",
            DotColor::DarkBlue => "#2563eb",
            DotColor::Purple => "#a855f7",
            DotColor::Gray => "#6b7280",
            DotColor::Red => "#ef4444",
        }
    }

    /// Persisted key name (camelCase, matching the stored JSON)
    pub fn key(&self) -> &'static str {
        match self {
            DotColor::Yellow => "yellow",
            DotColor::Green => "green",
            DotColor::LightBlue => "lightBlue",
            DotColor::DarkBlue => "darkBlue",
            DotColor::Purple => "purple",
            DotColor::Gray => "gray",
            DotColor::Red => "red",
        }
    }
}

impl fmt::Display for DotColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for DotColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "yellow" => Ok(DotColor::Yellow),
            "green" => Ok(DotColor::Green),
            "lightblue" => Ok(DotColor::LightBlue),
            "darkblue" => Ok(DotColor::DarkBlue),
            "purple" => Ok(DotColor::Purple),
            "gray" | "grey" => Ok(DotColor::Gray),
            "red" => Ok(DotColor::Red),
            _ => Err(format!(
                "Invalid dot color: '{}'. Valid colors are: yellow, green, \
                lightBlue, darkBlue, purple, gray, red",
                s
            )),
        }
    }
}

/// Free-text note attached to a person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonNote {
    pub id: String,
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: NoteKind,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

/// Where a note sits relative to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Pre,
    Post,
    #[default]
    General,
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NoteKind::Pre => "pre",
            NoteKind::Post => "post",
            NoteKind::General => "general",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for NoteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pre" => Ok(NoteKind::Pre),
            "post" => Ok(NoteKind::Post),
            "general" => Ok(NoteKind::General),
            _ => Err(format!(
                "Invalid note kind: '{}'. Valid kinds are: pre, post, general",
                s
            )),
        }
    }
}

/// A tracked contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    pub dot_color: DotColor,
    #[serde(default)]
    pub last_contact: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_count: u32,
    #[serde(default)]
    pub notes: Vec<PersonNote>,
    #[serde(default)]
    pub is_family: bool,
    #[serde(default)]
    pub is_platonic: bool,
}

impl Person {
    /// Whole calendar days (UTC) since the last contact.
    /// Returns None when the person has never been contacted.
    pub fn days_since_contact(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last_contact
            .map(|last| (now.date_naive() - last.date_naive()).num_days())
    }

    /// Whether the last contact falls within `window_days` calendar days of `now`.
    /// Uses the same calendar-day convention as `days_since_contact`.
    pub fn contacted_within(&self, now: DateTime<Utc>, window_days: i64) -> bool {
        match self.days_since_contact(now) {
            Some(days) => (0..=window_days).contains(&days),
            None => false,
        }
    }
}

/// Count people per dot color, in legend order
pub fn dot_counts(people: &[Person]) -> Vec<(DotColor, usize)> {
    DotColor::ALL
        .iter()
        .map(|color| {
            let count = people.iter().filter(|p| p.dot_color == *color).count();
            (*color, count)
        })
        .collect()
}
