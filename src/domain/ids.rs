//! Identifier allocation for collection entries.
//!
//! Ids are millisecond timestamps rendered as decimal strings, the same
//! scheme the persisted documents already use. Collisions from rapid
//! successive adds are bumped forward until unique.

use chrono::{DateTime, Utc};

/// Allocate a fresh id not present in `existing`
pub fn allocate_id<'a, I>(existing: I, now: DateTime<Utc>) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: Vec<&str> = existing.into_iter().collect();
    let mut candidate = now.timestamp_millis().max(0);
    loop {
        let id = candidate.to_string();
        if !taken.contains(&id.as_str()) {
            return id;
        }
        candidate += 1;
    }
}
