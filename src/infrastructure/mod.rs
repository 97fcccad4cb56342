//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod store;

pub use config::Config;
pub use store::{
    CollectionStore, FileStore, CONTENT_KEY, EVENTS_KEY, INDICATORS_KEY, PEOPLE_KEY,
};
