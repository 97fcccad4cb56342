//! Output formatting utilities

use crate::application::DayViewEntry;
use crate::domain::indicator::Indicator;
use crate::domain::person::{DotColor, Person};
use crate::domain::samples::Quote;
use crate::domain::{CalendarEvent, ContentItem, Vote};
use chrono::{DateTime, NaiveDate, Utc};

/// Phrase for a last-contact age in calendar days
pub fn contact_phrase(days: Option<i64>) -> String {
    match days {
        None => "Never".to_string(),
        Some(0) => "Today".to_string(),
        Some(1) => "Yesterday".to_string(),
        Some(n) => format!("{} days ago", n),
    }
}

/// Format the people list for display
pub fn format_people_list(people: &[Person], now: DateTime<Utc>) -> String {
    if people.is_empty() {
        return "No people found".to_string();
    }

    let mut output = String::new();
    for person in people {
        output.push_str(&format!(
            "{}  {:<9}  {:<24}  {}",
            person.id,
            person.dot_color.key(),
            person.name,
            contact_phrase(person.days_since_contact(now))
        ));
        if person.date_count > 0 {
            output.push_str(&format!("  ({} dates)", person.date_count));
        }
        output.push('\n');
    }
    output
}

/// Format the dot-color legend with counts
pub fn format_dot_legend(counts: &[(DotColor, usize)]) -> String {
    let mut output = String::new();
    for (color, count) in counts {
        output.push_str(&format!("{:<9}  {} ({})\n", color.key(), color.label(), count));
    }
    output
}

/// Format one person in full, including notes
pub fn format_person_detail(person: &Person, now: DateTime<Utc>) -> String {
    let mut output = format!(
        "{}  {} [{} - {}]\n",
        person.id,
        person.name,
        person.dot_color.key(),
        person.dot_color.label()
    );

    if let Some(phone) = &person.phone {
        output.push_str(&format!("  phone: {}\n", phone));
    }
    if let Some(email) = &person.email {
        output.push_str(&format!("  email: {}\n", email));
    }
    if let Some(instagram) = &person.instagram {
        output.push_str(&format!("  instagram: {}\n", instagram));
    }
    if let Some(facebook) = &person.facebook {
        output.push_str(&format!("  facebook: {}\n", facebook));
    }

    output.push_str(&format!(
        "  last contact: {}\n  dates: {}\n",
        contact_phrase(person.days_since_contact(now)),
        person.date_count
    ));

    if person.is_family {
        output.push_str("  family\n");
    }
    if person.is_platonic {
        output.push_str("  platonic\n");
    }

    if !person.notes.is_empty() {
        output.push_str("  notes:\n");
        for note in &person.notes {
            output.push_str(&format!(
                "    [{}] {} ({})\n",
                note.kind,
                note.content,
                note.created_at.format("%Y-%m-%d")
            ));
        }
    }

    output
}

/// Format the event list for display
pub fn format_event_list(events: &[CalendarEvent]) -> String {
    if events.is_empty() {
        return "No events found".to_string();
    }

    let mut output = String::new();
    for event in events {
        let times = match (&event.start_time, &event.end_time) {
            (Some(start), Some(end)) => format!("{} - {}", start, end),
            (Some(start), None) => start.clone(),
            _ => "all day".to_string(),
        };
        output.push_str(&format!(
            "{}  {}  {:<19}  {} [{}]\n",
            event.id,
            event.date.format("%Y-%m-%d"),
            times,
            event.title,
            event.category
        ));
    }
    output
}

/// Format the day view: events positioned on the hourly grid
pub fn format_day_view(date: NaiveDate, entries: &[DayViewEntry]) -> String {
    let mut output = format!("Day view for {}\n", date.format("%Y-%m-%d"));

    if entries.is_empty() {
        output.push_str("No events found\n");
        return output;
    }

    for entry in entries {
        let event = &entry.event;
        let times = format!(
            "{} - {}",
            event.start_time.as_deref().unwrap_or("9:00 AM"),
            event.end_time.as_deref().unwrap_or("10:00 AM")
        );
        output.push_str(&format!(
            "{:<19}  {} [{}]  top={:.0} height={:.0}\n",
            times, event.title, event.category, entry.block.top, entry.block.height
        ));
    }
    output
}

fn progress_bar(indicator: &Indicator, width: usize) -> String {
    let filled = (indicator.progress() * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Format the indicator list with progress bars
pub fn format_indicator_list(indicators: &[Indicator]) -> String {
    if indicators.is_empty() {
        return "No goals found".to_string();
    }

    let mut output = String::new();
    for indicator in indicators {
        output.push_str(&format!(
            "{}  {:<20}  {} {}/{}{}\n",
            indicator.id,
            indicator.name,
            progress_bar(indicator, 10),
            indicator.current,
            indicator.goal,
            if indicator.is_met() { "  (met)" } else { "" }
        ));
    }
    output
}

/// Format the feed, newest first
pub fn format_feed(items: &[ContentItem]) -> String {
    if items.is_empty() {
        return "No content found".to_string();
    }

    let mut output = String::new();
    for item in items {
        output.push_str(&format!(
            "{}  [{}] {}\n       +{} / -{}",
            item.id,
            item.category.label(),
            item.text,
            item.upvotes,
            item.downvotes
        ));
        match item.user_vote {
            Some(Vote::Up) => output.push_str("  (you voted up)"),
            Some(Vote::Down) => output.push_str("  (you voted down)"),
            None => {}
        }
        if item.comments > 0 {
            output.push_str(&format!("  {} comments", item.comments));
        }
        if item.is_anonymous {
            output.push_str("  anonymous");
        }
        output.push('\n');
    }
    output
}

/// Format the home summary
pub fn format_home(
    quote: &Quote,
    indicators: &[Indicator],
    recent: &[Person],
    recent_days: i64,
    now: DateTime<Utc>,
) -> String {
    let mut output = format!("Week of {}\n\n", now.format("%B %-d"));

    output.push_str(&format!(
        "\"{}\"\n  - {}, {}\n\n",
        quote.text, quote.author, quote.reference
    ));

    output.push_str("Weekly Key Indicators\n");
    output.push_str(&format_indicator_list(indicators));

    output.push_str(&format!(
        "\nContacted in the last {} days\n",
        recent_days
    ));
    if recent.is_empty() {
        output.push_str("No one yet - reach out!\n");
    } else {
        output.push_str(&format_people_list(recent, now));
    }

    output
}
