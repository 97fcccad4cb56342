//! Weekly goal indicator use case

use crate::domain::ids::allocate_id;
use crate::domain::indicator::Indicator;
use crate::error::{AmityError, Result};
use crate::infrastructure::{FileStore, INDICATORS_KEY};
use chrono::{DateTime, Utc};

/// Service for managing the indicators collection
pub struct IndicatorService {
    store: FileStore,
    seeds: Vec<Indicator>,
}

impl IndicatorService {
    /// Create a new indicator service with an explicit seed set
    pub fn new(store: FileStore, seeds: Vec<Indicator>) -> Self {
        IndicatorService { store, seeds }
    }

    /// Load the collection, falling back to the injected seeds
    pub fn load(&self) -> Result<Vec<Indicator>> {
        Ok(self
            .store
            .load(INDICATORS_KEY)?
            .unwrap_or_else(|| self.seeds.clone()))
    }

    fn save(&self, indicators: &[Indicator]) -> Result<()> {
        self.store.save(INDICATORS_KEY, indicators)
    }

    /// Add an indicator; the counter starts at zero
    pub fn add(&self, name: &str, goal: u32, now: DateTime<Utc>) -> Result<Indicator> {
        let mut indicators = self.load()?;
        let id = allocate_id(indicators.iter().map(|i| i.id.as_str()), now);

        let indicator = Indicator {
            id,
            name: name.to_string(),
            current: 0,
            goal,
        };

        indicators.push(indicator.clone());
        self.save(&indicators)?;
        Ok(indicator)
    }

    /// Set the current count for one indicator
    pub fn set_current(&self, id: &str, current: u32) -> Result<Indicator> {
        self.replace(id, |indicator| indicator.current = current)
    }

    /// Move one indicator's counter by a signed delta, saturating at zero
    pub fn bump(&self, id: &str, delta: i64) -> Result<Indicator> {
        self.replace(id, |indicator| indicator.bump(delta))
    }

    /// Zero every counter for a fresh week
    pub fn reset_all(&self) -> Result<Vec<Indicator>> {
        let mut indicators = self.load()?;
        for indicator in &mut indicators {
            indicator.current = 0;
        }
        self.save(&indicators)?;
        Ok(indicators)
    }

    fn replace<F>(&self, id: &str, mutate: F) -> Result<Indicator>
    where
        F: Fn(&mut Indicator),
    {
        let indicators = self.load()?;
        let mut updated_entry = None;

        let updated: Vec<Indicator> = indicators
            .iter()
            .map(|indicator| {
                if indicator.id == id {
                    let mut next = indicator.clone();
                    mutate(&mut next);
                    updated_entry = Some(next.clone());
                    next
                } else {
                    indicator.clone()
                }
            })
            .collect();

        let indicator = updated_entry.ok_or_else(|| AmityError::UnknownId {
            collection: "indicators",
            id: id.to_string(),
        })?;

        self.save(&updated)?;
        Ok(indicator)
    }
}
