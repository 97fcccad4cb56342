//! Community feed content and the vote transition

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Feed category tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Dates,
    Memes,
    Spiritual,
    Tips,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 4] = [
        ContentCategory::Dates,
        ContentCategory::Memes,
        ContentCategory::Spiritual,
        ContentCategory::Tips,
    ];

    /// Tab label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            ContentCategory::Dates => "Date Ideas",
            ContentCategory::Memes => "Memes",
            ContentCategory::Spiritual => "Spiritual",
            ContentCategory::Tips => "Life Tips",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ContentCategory::Dates => "dates",
            ContentCategory::Memes => "memes",
            ContentCategory::Spiritual => "spiritual",
            ContentCategory::Tips => "tips",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ContentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dates" => Ok(ContentCategory::Dates),
            "memes" => Ok(ContentCategory::Memes),
            "spiritual" => Ok(ContentCategory::Spiritual),
            "tips" => Ok(ContentCategory::Tips),
            _ => Err(format!(
                "Invalid category: '{}'. Valid categories are: dates, memes, spiritual, tips",
                s
            )),
        }
    }
}

/// A single up or down vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
}

impl FromStr for Vote {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Vote::Up),
            "down" => Ok(Vote::Down),
            _ => Err(format!("Invalid vote: '{}'. Valid votes are: up, down", s)),
        }
    }
}

/// A votable community feed item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub category: ContentCategory,
    pub text: String,
    pub upvotes: u32,
    pub downvotes: u32,
    /// The viewer's current vote; None when no vote is held
    #[serde(default)]
    pub user_vote: Option<Vote>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub is_anonymous: bool,
}

impl ContentItem {
    /// Three-way vote toggle on a single item.
    ///
    /// Same vote again clears it; the opposite vote swaps the counters;
    /// no current vote records a fresh one. Decrements saturate at zero so
    /// a document with drifted counters cannot underflow.
    pub fn apply_vote(&mut self, vote: Vote) {
        match self.user_vote {
            Some(current) if current == vote => {
                match vote {
                    Vote::Up => self.upvotes = self.upvotes.saturating_sub(1),
                    Vote::Down => self.downvotes = self.downvotes.saturating_sub(1),
                }
                self.user_vote = None;
            }
            Some(_) => {
                match vote {
                    Vote::Up => {
                        self.downvotes = self.downvotes.saturating_sub(1);
                        self.upvotes += 1;
                    }
                    Vote::Down => {
                        self.upvotes = self.upvotes.saturating_sub(1);
                        self.downvotes += 1;
                    }
                }
                self.user_vote = Some(vote);
            }
            None => {
                match vote {
                    Vote::Up => self.upvotes += 1,
                    Vote::Down => self.downvotes += 1,
                }
                self.user_vote = Some(vote);
            }
        }
    }
}

/// Apply a vote to the item with the given id, returning the new collection.
/// An unknown id is a no-op: the input comes back unchanged.
pub fn apply_vote(items: &[ContentItem], id: &str, vote: Vote) -> Vec<ContentItem> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                let mut updated = item.clone();
                updated.apply_vote(vote);
                updated
            } else {
                item.clone()
            }
        })
        .collect()
}
