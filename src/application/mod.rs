//! Application layer - Use cases and orchestration

pub mod feed;
pub mod indicators;
pub mod init;
pub mod manage_config;
pub mod people;
pub mod planner;

pub use feed::FeedService;
pub use indicators::IndicatorService;
pub use manage_config::ConfigService;
pub use people::{NewPerson, PeopleService, PersonUpdate};
pub use planner::{DayViewEntry, EventUpdate, NewEvent, PlannerService};
