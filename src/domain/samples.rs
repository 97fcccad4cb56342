//! Seed datasets used when a collection has never been written.
//!
//! These are passed into the services explicitly rather than read from
//! module-level state, so tests can swap them out.

use crate::domain::content::{ContentCategory, ContentItem, Vote};
use crate::domain::indicator::Indicator;
use crate::domain::person::{DotColor, Person};
use chrono::{DateTime, Datelike, Duration, Utc};

/// A displayable quote for the home summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
    pub reference: &'static str,
}

const QUOTES: [Quote; 1] = [Quote {
    text: "Be faithful in small things because it is in them that your strength lies.",
    author: "Mother Teresa",
    reference: "Conference Talk, October 2023",
}];

/// Rotate through the quote list by day of year
pub fn quote_of_the_day(now: DateTime<Utc>) -> &'static Quote {
    let index = (now.date_naive().ordinal0() as usize) % QUOTES.len();
    &QUOTES[index]
}

fn person(
    id: &str,
    name: &str,
    phone: &str,
    dot_color: DotColor,
    days_ago: i64,
    date_count: u32,
    now: DateTime<Utc>,
) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        phone: Some(phone.to_string()),
        email: None,
        instagram: None,
        facebook: None,
        dot_color,
        last_contact: Some(now - Duration::days(days_ago)),
        date_count,
        notes: vec![],
        is_family: false,
        is_platonic: false,
    }
}

/// Starter contacts, shown until the people collection is first saved
pub fn sample_people(now: DateTime<Utc>) -> Vec<Person> {
    vec![
        person("1", "Sarah Johnson", "(555) 123-4567", DotColor::Green, 2, 2, now),
        person("2", "Mike Chen", "(555) 234-5678", DotColor::Yellow, 5, 0, now),
        person("3", "Emma Wilson", "(555) 345-6789", DotColor::LightBlue, 1, 3, now),
    ]
}

fn content(
    id: &str,
    category: ContentCategory,
    text: &str,
    upvotes: u32,
    downvotes: u32,
    user_vote: Option<Vote>,
    days_ago: i64,
    comments: u32,
    now: DateTime<Utc>,
) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        category,
        text: text.to_string(),
        upvotes,
        downvotes,
        user_vote,
        created_at: now - Duration::days(days_ago),
        comments,
        is_anonymous: false,
    }
}

/// Starter feed, shown until the content collection is first saved
pub fn sample_content(now: DateTime<Utc>) -> Vec<ContentItem> {
    vec![
        content(
            "1",
            ContentCategory::Dates,
            "Go mini golfing! It's casual, fun, and gives you plenty of time to talk. \
             Plus, you can laugh at each other's terrible shots.",
            23,
            2,
            None,
            2,
            5,
            now,
        ),
        content(
            "2",
            ContentCategory::Memes,
            "When someone asks if you miss your mission and you start crying happy tears \
             while explaining how much you loved the structure...",
            45,
            1,
            Some(Vote::Up),
            1,
            12,
            now,
        ),
        content(
            "3",
            ContentCategory::Spiritual,
            "\"The most important thing in our lives is what we do for others\" - \
             President Nelson. Small acts of service can change everything.",
            67,
            0,
            None,
            3,
            8,
            now,
        ),
        content(
            "4",
            ContentCategory::Dates,
            "Try a cooking class together! It's interactive, you learn something new, \
             and you get to eat the results. Win-win-win.",
            31,
            4,
            None,
            4,
            7,
            now,
        ),
    ]
}

/// The six default weekly indicators
pub fn default_indicators() -> Vec<Indicator> {
    let defaults = [
        ("1", "Temple Attendance", 1),
        ("2", "Scripture Study", 7),
        ("3", "Church Attendance", 1),
        ("4", "Inviting Friends", 3),
        ("5", "Ministering", 2),
        ("6", "Dates", 1),
    ];
    defaults
        .iter()
        .map(|(id, name, goal)| Indicator {
            id: id.to_string(),
            name: name.to_string(),
            current: 0,
            goal: *goal,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_people_shape() {
        let now = Utc::now();
        let people = sample_people(now);
        assert_eq!(people.len(), 3);
        assert_eq!(people[0].name, "Sarah Johnson");
        assert_eq!(people[0].dot_color, DotColor::Green);
        assert_eq!(people[0].days_since_contact(now), Some(2));
        assert_eq!(people[2].date_count, 3);
    }

    #[test]
    fn test_sample_content_vote_state() {
        let content = sample_content(Utc::now());
        assert_eq!(content.len(), 4);
        assert_eq!(content[1].user_vote, Some(Vote::Up));
        assert_eq!(content[2].upvotes, 67);
        assert_eq!(content[2].downvotes, 0);
    }

    #[test]
    fn test_default_indicators_start_at_zero() {
        let indicators = default_indicators();
        assert_eq!(indicators.len(), 6);
        assert!(indicators.iter().all(|i| i.current == 0));
        assert_eq!(indicators[1].name, "Scripture Study");
        assert_eq!(indicators[1].goal, 7);
    }

    #[test]
    fn test_quote_of_the_day_is_stable_within_a_day() {
        let now = Utc::now();
        assert_eq!(quote_of_the_day(now), quote_of_the_day(now));
    }
}
