//! Contact management use case

use crate::domain::ids::allocate_id;
use crate::domain::person::{dot_counts, DotColor, NoteKind, Person, PersonNote};
use crate::error::{AmityError, Result};
use crate::infrastructure::{FileStore, PEOPLE_KEY};
use chrono::{DateTime, Utc};

/// Fields for a new contact
#[derive(Debug, Clone, Default)]
pub struct NewPerson {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub dot_color: DotColor,
    pub is_family: bool,
    pub is_platonic: bool,
}

/// Partial update; None fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct PersonUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub dot_color: Option<DotColor>,
    pub is_family: Option<bool>,
    pub is_platonic: Option<bool>,
}

/// Service for managing the people collection
pub struct PeopleService {
    store: FileStore,
    seeds: Vec<Person>,
}

impl PeopleService {
    /// Create a new people service. `seeds` is the dataset presented
    /// before the collection is first saved.
    pub fn new(store: FileStore, seeds: Vec<Person>) -> Self {
        PeopleService { store, seeds }
    }

    /// Load the collection, falling back to the injected seeds when no
    /// document has been written yet
    pub fn load(&self) -> Result<Vec<Person>> {
        Ok(self
            .store
            .load(PEOPLE_KEY)?
            .unwrap_or_else(|| self.seeds.clone()))
    }

    fn save(&self, people: &[Person]) -> Result<()> {
        self.store.save(PEOPLE_KEY, people)
    }

    /// List people, optionally filtered by dot color and/or recency window
    pub fn list(
        &self,
        dot: Option<DotColor>,
        recent_within: Option<(DateTime<Utc>, i64)>,
    ) -> Result<Vec<Person>> {
        let mut people = self.load()?;
        if let Some(color) = dot {
            people.retain(|p| p.dot_color == color);
        }
        if let Some((now, window_days)) = recent_within {
            people.retain(|p| p.contacted_within(now, window_days));
        }
        Ok(people)
    }

    /// Fetch a single person by id
    pub fn get(&self, id: &str) -> Result<Person> {
        self.load()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AmityError::UnknownId {
                collection: "people",
                id: id.to_string(),
            })
    }

    /// Add a contact and persist the collection
    pub fn add(&self, new: NewPerson, now: DateTime<Utc>) -> Result<Person> {
        let mut people = self.load()?;
        let id = allocate_id(people.iter().map(|p| p.id.as_str()), now);

        let person = Person {
            id,
            name: new.name,
            phone: new.phone,
            email: new.email,
            instagram: new.instagram,
            facebook: new.facebook,
            dot_color: new.dot_color,
            last_contact: None,
            date_count: 0,
            notes: vec![],
            is_family: new.is_family,
            is_platonic: new.is_platonic,
        };

        people.push(person.clone());
        self.save(&people)?;
        Ok(person)
    }

    /// Apply a partial update to one person
    pub fn update(&self, id: &str, update: PersonUpdate) -> Result<Person> {
        self.replace(id, |person| {
            if let Some(name) = update.name.clone() {
                person.name = name;
            }
            if let Some(phone) = update.phone.clone() {
                person.phone = Some(phone);
            }
            if let Some(email) = update.email.clone() {
                person.email = Some(email);
            }
            if let Some(instagram) = update.instagram.clone() {
                person.instagram = Some(instagram);
            }
            if let Some(facebook) = update.facebook.clone() {
                person.facebook = Some(facebook);
            }
            if let Some(dot_color) = update.dot_color {
                person.dot_color = dot_color;
            }
            if let Some(is_family) = update.is_family {
                person.is_family = is_family;
            }
            if let Some(is_platonic) = update.is_platonic {
                person.is_platonic = is_platonic;
            }
        })
    }

    /// Stamp the last-contact time; optionally count it as a date
    pub fn record_contact(&self, id: &str, now: DateTime<Utc>, was_date: bool) -> Result<Person> {
        self.replace(id, |person| {
            person.last_contact = Some(now);
            if was_date {
                person.date_count += 1;
            }
        })
    }

    /// Append a note to a person
    pub fn add_note(
        &self,
        id: &str,
        content: &str,
        kind: NoteKind,
        event_id: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Person> {
        let note_id = {
            let people = self.load()?;
            let person = people
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| AmityError::UnknownId {
                    collection: "people",
                    id: id.to_string(),
                })?;
            allocate_id(person.notes.iter().map(|n| n.id.as_str()), now)
        };

        self.replace(id, |person| {
            person.notes.push(PersonNote {
                id: note_id.clone(),
                content: content.to_string(),
                kind,
                created_at: now,
                event_id: event_id.clone(),
            });
        })
    }

    /// Remove a person from the collection
    pub fn remove(&self, id: &str) -> Result<()> {
        let people = self.load()?;
        let remaining: Vec<Person> = people.iter().filter(|p| p.id != id).cloned().collect();

        if remaining.len() == people.len() {
            return Err(AmityError::UnknownId {
                collection: "people",
                id: id.to_string(),
            });
        }

        self.save(&remaining)
    }

    /// People counted per dot color, in legend order
    pub fn counts(&self) -> Result<Vec<(DotColor, usize)>> {
        Ok(dot_counts(&self.load()?))
    }

    /// Replace the collection with a copy in which the entry with `id` has
    /// been passed through `mutate`
    fn replace<F>(&self, id: &str, mutate: F) -> Result<Person>
    where
        F: Fn(&mut Person),
    {
        let people = self.load()?;
        let mut updated_entry = None;

        let updated: Vec<Person> = people
            .iter()
            .map(|person| {
                if person.id == id {
                    let mut next = person.clone();
                    mutate(&mut next);
                    updated_entry = Some(next.clone());
                    next
                } else {
                    person.clone()
                }
            })
            .collect();

        let person = updated_entry.ok_or_else(|| AmityError::UnknownId {
            collection: "people",
            id: id.to_string(),
        })?;

        self.save(&updated)?;
        Ok(person)
    }
}
