//! amity - Relationship and schedule tracker
//!
//! A command-line tracker for contacts with relationship-status dot colors,
//! a calendar planner with a day-view layout, weekly goal indicators, and a
//! community content feed with voting. All data lives in local JSON
//! collection documents under an `.amity` directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::AmityError;
