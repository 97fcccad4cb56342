//! Community feed use case

use crate::domain::content::{apply_vote, ContentCategory, ContentItem, Vote};
use crate::domain::ids::allocate_id;
use crate::error::{AmityError, Result};
use crate::infrastructure::{FileStore, CONTENT_KEY};
use chrono::{DateTime, Utc};

/// Service for managing the community content collection
pub struct FeedService {
    store: FileStore,
    seeds: Vec<ContentItem>,
}

impl FeedService {
    /// Create a new feed service with an explicit seed set
    pub fn new(store: FileStore, seeds: Vec<ContentItem>) -> Self {
        FeedService { store, seeds }
    }

    /// Load the collection, falling back to the injected seeds
    pub fn load(&self) -> Result<Vec<ContentItem>> {
        Ok(self
            .store
            .load(CONTENT_KEY)?
            .unwrap_or_else(|| self.seeds.clone()))
    }

    fn save(&self, items: &[ContentItem]) -> Result<()> {
        self.store.save(CONTENT_KEY, items)
    }

    /// List items newest first, optionally restricted to one category
    pub fn list(&self, category: Option<ContentCategory>) -> Result<Vec<ContentItem>> {
        let mut items = self.load()?;
        if let Some(category) = category {
            items.retain(|i| i.category == category);
        }
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    /// Add an item at the head of the feed with zero votes and no comments
    pub fn add(
        &self,
        category: ContentCategory,
        text: &str,
        is_anonymous: bool,
        now: DateTime<Utc>,
    ) -> Result<ContentItem> {
        let items = self.load()?;
        let id = allocate_id(items.iter().map(|i| i.id.as_str()), now);

        let item = ContentItem {
            id,
            category,
            text: text.to_string(),
            upvotes: 0,
            downvotes: 0,
            user_vote: None,
            created_at: now,
            comments: 0,
            is_anonymous,
        };

        let mut updated = Vec::with_capacity(items.len() + 1);
        updated.push(item.clone());
        updated.extend(items);
        self.save(&updated)?;
        Ok(item)
    }

    /// Apply a vote to one item and persist the updated collection
    pub fn vote(&self, id: &str, vote: Vote) -> Result<ContentItem> {
        let items = self.load()?;

        if !items.iter().any(|i| i.id == id) {
            return Err(AmityError::UnknownId {
                collection: "content",
                id: id.to_string(),
            });
        }

        let updated = apply_vote(&items, id, vote);
        self.save(&updated)?;

        // The id was checked above, so the find cannot miss
        updated
            .into_iter()
            .find(|i| i.id == id)
            .ok_or_else(|| AmityError::UnknownId {
                collection: "content",
                id: id.to_string(),
            })
    }
}
