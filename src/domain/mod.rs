//! Domain layer - Data types and pure logic

pub mod content;
pub mod event;
pub mod ids;
pub mod indicator;
pub mod person;
pub mod samples;
pub mod schedule;

pub use content::{ContentCategory, ContentItem, Vote};
pub use event::CalendarEvent;
pub use indicator::Indicator;
pub use person::{DotColor, Person, PersonNote};
pub use schedule::TimeOfDay;
