//! Calendar planning use case

use crate::domain::event::{default_color, parse_time_range, CalendarEvent};
use crate::domain::ids::allocate_id;
use crate::domain::schedule::{layout_block, EventBlock};
use crate::error::{AmityError, Result};
use crate::infrastructure::{FileStore, EVENTS_KEY};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Parse a calendar date in YYYY-MM-DD form
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AmityError::InvalidDate(s.to_string()))
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default())
}

/// Fields for a new event
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub notes: Option<String>,
}

/// Partial update; None fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub notes: Option<String>,
    pub pre_notes: Option<String>,
    pub post_notes: Option<String>,
}

/// An event with its computed position on the hourly grid
#[derive(Debug, Clone, PartialEq)]
pub struct DayViewEntry {
    pub event: CalendarEvent,
    pub block: EventBlock,
}

/// Service for managing the events collection
pub struct PlannerService {
    store: FileStore,
}

impl PlannerService {
    /// Create a new planner service
    pub fn new(store: FileStore) -> Self {
        PlannerService { store }
    }

    /// Load the collection; an unwritten document is an empty planner
    pub fn load(&self) -> Result<Vec<CalendarEvent>> {
        Ok(self.store.load(EVENTS_KEY)?.unwrap_or_default())
    }

    fn save(&self, events: &[CalendarEvent]) -> Result<()> {
        self.store.save(EVENTS_KEY, events)
    }

    /// Add an event. Start/end times are validated: both must parse, and
    /// when both are present the start must come before the end.
    pub fn add(&self, new: NewEvent, now: DateTime<Utc>) -> Result<CalendarEvent> {
        parse_time_range(new.start_time.as_deref(), new.end_time.as_deref())?;

        let mut events = self.load()?;
        let id = allocate_id(events.iter().map(|e| e.id.as_str()), now);

        let category = new.category.unwrap_or_else(|| "Other".to_string());
        let color = new
            .color
            .unwrap_or_else(|| default_color(&category).to_string());

        let event = CalendarEvent {
            id,
            title: new.title,
            date: midnight_utc(new.date),
            start_time: new.start_time,
            end_time: new.end_time,
            category,
            color,
            notes: new.notes,
            pre_notes: None,
            post_notes: None,
        };

        events.push(event.clone());
        self.save(&events)?;
        Ok(event)
    }

    /// Apply a partial update to one event, re-validating the resulting
    /// start/end pair
    pub fn update(&self, id: &str, update: EventUpdate) -> Result<CalendarEvent> {
        let events = self.load()?;
        let current = events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AmityError::UnknownId {
                collection: "events",
                id: id.to_string(),
            })?;

        let start = update
            .start_time
            .clone()
            .or_else(|| current.start_time.clone());
        let end = update.end_time.clone().or_else(|| current.end_time.clone());
        parse_time_range(start.as_deref(), end.as_deref())?;

        let updated: Vec<CalendarEvent> = events
            .iter()
            .map(|event| {
                if event.id != id {
                    return event.clone();
                }
                let mut next = event.clone();
                if let Some(title) = update.title.clone() {
                    next.title = title;
                }
                if let Some(date) = update.date {
                    next.date = midnight_utc(date);
                }
                next.start_time = start.clone();
                next.end_time = end.clone();
                if let Some(category) = update.category.clone() {
                    next.category = category;
                }
                if let Some(color) = update.color.clone() {
                    next.color = color;
                }
                if let Some(notes) = update.notes.clone() {
                    next.notes = Some(notes);
                }
                if let Some(pre) = update.pre_notes.clone() {
                    next.pre_notes = Some(pre);
                }
                if let Some(post) = update.post_notes.clone() {
                    next.post_notes = Some(post);
                }
                next
            })
            .collect();

        self.save(&updated)?;
        Ok(updated
            .into_iter()
            .find(|e| e.id == id)
            .unwrap_or_else(|| current.clone()))
    }

    /// Remove an event from the collection
    pub fn remove(&self, id: &str) -> Result<()> {
        let events = self.load()?;
        let remaining: Vec<CalendarEvent> =
            events.iter().filter(|e| e.id != id).cloned().collect();

        if remaining.len() == events.len() {
            return Err(AmityError::UnknownId {
                collection: "events",
                id: id.to_string(),
            });
        }

        self.save(&remaining)
    }

    /// List events, optionally restricted to one calendar date, ordered by
    /// date then start time
    pub fn list(&self, date: Option<NaiveDate>) -> Result<Vec<CalendarEvent>> {
        let mut events = self.load()?;
        if let Some(date) = date {
            events.retain(|e| e.is_on(date));
        }
        events.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.start().ok().cmp(&b.start().ok()))
        });
        Ok(events)
    }

    /// Events for one date laid out on the hourly grid, ordered by block top
    pub fn day_view(&self, date: NaiveDate, row_height: u32) -> Result<Vec<DayViewEntry>> {
        let events = self.list(Some(date))?;

        let mut entries = Vec::with_capacity(events.len());
        for event in events {
            let block = layout_block(event.start()?, event.end()?, row_height);
            entries.push(DayViewEntry { event, block });
        }

        entries.sort_by(|a, b| a.block.top.total_cmp(&b.block.top));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> (TempDir, PlannerService) {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        crate::infrastructure::CollectionStore::initialize(&store).unwrap();
        (temp, PlannerService::new(store))
    }

    fn new_event(title: &str, date: &str, start: &str, end: &str) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            date: parse_date(date).unwrap(),
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            category: None,
            color: None,
            notes: None,
        }
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-17").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
        );
        assert!(matches!(
            parse_date("17-01-2025"),
            Err(AmityError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_empty_planner() {
        let (_temp, service) = service();
        assert!(service.load().unwrap().is_empty());
        assert!(service.list(None).unwrap().is_empty());
    }

    #[test]
    fn test_add_defaults_category_and_color() {
        let (_temp, service) = service();
        let event = service
            .add(
                NewEvent {
                    title: "Catch up".to_string(),
                    date: parse_date("2025-01-17").unwrap(),
                    start_time: None,
                    end_time: None,
                    category: None,
                    color: None,
                    notes: None,
                },
                Utc::now(),
            )
            .unwrap();

        assert_eq!(event.category, "Other");
        assert_eq!(event.color, "#6b7280");
    }

    #[test]
    fn test_add_uses_palette_color_for_known_category() {
        let (_temp, service) = service();
        let mut new = new_event("Dinner", "2025-01-17", "6:00 PM", "8:00 PM");
        new.category = Some("Meal".to_string());

        let event = service.add(new, Utc::now()).unwrap();
        assert_eq!(event.color, "#92400e");
    }

    #[test]
    fn test_add_rejects_inverted_times() {
        let (_temp, service) = service();
        let result = service.add(
            new_event("Backwards", "2025-01-17", "3:00 PM", "2:00 PM"),
            Utc::now(),
        );
        assert!(matches!(result, Err(AmityError::InvalidTime(_))));
        // Nothing was written
        assert!(service.load().unwrap().is_empty());
    }

    #[test]
    fn test_add_rejects_malformed_time() {
        let (_temp, service) = service();
        let mut new = new_event("Bad", "2025-01-17", "9:00 AM", "10:00 AM");
        new.end_time = Some("25:99".to_string());
        assert!(service.add(new, Utc::now()).is_err());
    }

    #[test]
    fn test_update_validates_combined_times() {
        let (_temp, service) = service();
        let event = service
            .add(
                new_event("Lunch", "2025-01-17", "12:00 PM", "1:00 PM"),
                Utc::now(),
            )
            .unwrap();

        // Moving the start past the stored end must fail
        let result = service.update(
            &event.id,
            EventUpdate {
                start_time: Some("2:00 PM".to_string()),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(AmityError::InvalidTime(_))));

        // Moving both together is fine
        let updated = service
            .update(
                &event.id,
                EventUpdate {
                    start_time: Some("2:00 PM".to_string()),
                    end_time: Some("3:00 PM".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.start_time.as_deref(), Some("2:00 PM"));
    }

    #[test]
    fn test_list_filters_by_date_and_sorts_by_start() {
        let (_temp, service) = service();
        let now = Utc::now();
        service
            .add(new_event("Late", "2025-01-17", "3:00 PM", "4:00 PM"), now)
            .unwrap();
        service
            .add(new_event("Early", "2025-01-17", "8:00 AM", "9:00 AM"), now)
            .unwrap();
        service
            .add(new_event("Elsewhere", "2025-01-18", "8:00 AM", "9:00 AM"), now)
            .unwrap();

        let day = service.list(Some(parse_date("2025-01-17").unwrap())).unwrap();
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].title, "Early");
        assert_eq!(day[1].title, "Late");
    }

    #[test]
    fn test_day_view_positions() {
        let (_temp, service) = service();
        service
            .add(
                new_event("Breakfast", "2025-01-17", "9:00 AM", "10:00 AM"),
                Utc::now(),
            )
            .unwrap();

        let entries = service
            .day_view(parse_date("2025-01-17").unwrap(), 60)
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].block.top, 540.0);
        assert_eq!(entries[0].block.height, 60.0);
    }

    #[test]
    fn test_day_view_uses_defaults_for_untimed_events() {
        let (_temp, service) = service();
        service
            .add(
                NewEvent {
                    title: "Sometime".to_string(),
                    date: parse_date("2025-01-17").unwrap(),
                    start_time: None,
                    end_time: None,
                    category: None,
                    color: None,
                    notes: None,
                },
                Utc::now(),
            )
            .unwrap();

        let entries = service
            .day_view(parse_date("2025-01-17").unwrap(), 60)
            .unwrap();
        // Falls back to the 9:00-10:00 AM slot
        assert_eq!(entries[0].block.top, 540.0);
        assert_eq!(entries[0].block.height, 60.0);
    }

    #[test]
    fn test_remove() {
        let (_temp, service) = service();
        let event = service
            .add(new_event("Gone", "2025-01-17", "9:00 AM", "10:00 AM"), Utc::now())
            .unwrap();

        service.remove(&event.id).unwrap();
        assert!(service.load().unwrap().is_empty());
        assert!(matches!(
            service.remove(&event.id),
            Err(AmityError::UnknownId { .. })
        ));
    }
}
