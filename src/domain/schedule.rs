//! 12-hour clock parsing and day-view grid layout

use crate::error::{AmityError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Default pixel height of one hour row in the day view
pub const DEFAULT_ROW_HEIGHT: u32 = 60;

/// Smallest height an event block may render at
pub const MIN_BLOCK_HEIGHT: f64 = 30.0;

/// Regex for 12-hour clock strings: "9:00 AM", "12:30 PM".
/// The meridiem marker is uppercase only, matching the stored format.
fn time_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{1,2}):(\d{2}) (AM|PM)$").unwrap())
}

/// A wall-clock time of day, parsed from "H:MM AM|PM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour24: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Fractional hour offset from midnight, in [0, 24)
    pub fn hour_offset(&self) -> f64 {
        self.hour24 as f64 + self.minute as f64 / 60.0
    }
}

impl FromStr for TimeOfDay {
    type Err = AmityError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = time_regex()
            .captures(s.trim())
            .ok_or_else(|| AmityError::InvalidTime(s.to_string()))?;

        // The regex guarantees digits, so these parses cannot fail
        let hour: u32 = caps[1].parse().unwrap_or(0);
        let minute: u32 = caps[2].parse().unwrap_or(0);

        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(AmityError::InvalidTime(s.to_string()));
        }

        let hour24 = match (&caps[3], hour) {
            ("PM", 12) => 12,
            ("PM", h) => h + 12,
            ("AM", 12) => 0,
            (_, h) => h,
        };

        Ok(TimeOfDay { hour24, minute })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour12, meridiem) = match self.hour24 {
            0 => (12, "AM"),
            h if h < 12 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        write!(f, "{}:{:02} {}", hour12, self.minute, meridiem)
    }
}

/// Grid-row label for an hour of the day (0..24)
pub fn hour_label(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        h if h < 12 => format!("{} AM", h),
        12 => "12 PM".to_string(),
        h => format!("{} PM", h - 12),
    }
}

/// Pixel placement of an event block within the hourly grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventBlock {
    pub top: f64,
    pub height: f64,
}

/// Lay out an event on the hourly grid.
///
/// Top is the start offset scaled by the row height; height is the span
/// scaled the same way, floored at `MIN_BLOCK_HEIGHT`. End at or before
/// start is not an error here - the block just clamps to the minimum.
pub fn layout_block(start: TimeOfDay, end: TimeOfDay, row_height: u32) -> EventBlock {
    let row = row_height as f64;
    let top = start.hour_offset() * row;
    let height = (end.hour_offset() - start.hour_offset()) * row;
    EventBlock {
        top,
        height: height.max(MIN_BLOCK_HEIGHT),
    }
}
