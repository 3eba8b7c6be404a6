//! In-memory list of entries mirrored to the key-value store.
//!
//! Every mutation rewrites the whole list under [`DATA_KEY`]. Persistence
//! failures are logged by the storage adapter and surface here as flags,
//! never as errors.

use super::clock::Clock;
use super::week::{format_date, month_bounds, week_start};
use crate::models::{Entry, EntryFields, Statistics};
use crate::storage::{DATA_KEY, LAST_CATEGORY_KEY, LAST_SUBCATEGORY_KEY, Storage};
use chrono::NaiveDate;

/// Result of a successful add or update.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub entry: Entry,
    /// `false` when the change is only held in memory.
    pub persisted: bool,
}

pub struct RecordStore {
    storage: Storage,
    clock: Box<dyn Clock>,
    entries: Vec<Entry>,
    current_week_start: NaiveDate,
}

impl RecordStore {
    /// Load the persisted entries (empty when absent or corrupt) and select
    /// the clock's current week.
    pub fn init(storage: Storage, clock: impl Clock + 'static) -> Self {
        let entries: Vec<Entry> = storage.load(DATA_KEY).unwrap_or_default();
        let current_week_start = week_start(clock.today());

        Self {
            storage,
            clock: Box::new(clock),
            entries,
            current_week_start,
        }
    }

    pub fn current_week_start(&self) -> NaiveDate {
        self.current_week_start
    }

    /// Select the week containing `date`.
    pub fn set_week(&mut self, date: NaiveDate) {
        self.current_week_start = week_start(date);
    }

    pub fn set_this_week(&mut self) {
        self.current_week_start = week_start(self.clock.today());
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    fn save(&mut self) -> bool {
        self.storage.save(DATA_KEY, &self.entries)
    }

    pub fn add(&mut self, fields: EntryFields) -> Mutation {
        let entry = Entry::new(fields, self.current_week_start, self.clock.now_millis());
        self.entries.push(entry.clone());
        let persisted = self.save();
        Mutation { entry, persisted }
    }

    /// `None` when no entry has this id.
    pub fn update(&mut self, id: &str, fields: EntryFields) -> Option<Mutation> {
        let entry = self.entries.iter_mut().find(|e| e.id() == id)?;
        entry.apply(fields);
        let entry = entry.clone();

        let persisted = self.save();
        Some(Mutation { entry, persisted })
    }

    /// `None` when no entry has this id; nothing is written in that case.
    /// Otherwise whether the shortened list was persisted.
    pub fn delete(&mut self, id: &str) -> Option<bool> {
        let index = self.entries.iter().position(|e| e.id() == id)?;

        self.entries.remove(index);
        Some(self.save())
    }

    /// Drop every entry. Returns whether the empty list was persisted.
    pub fn delete_all(&mut self) -> bool {
        self.entries.clear();
        self.save()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest week first; within a week, newest entry first.
    pub fn get_all(&self) -> Vec<&Entry> {
        let mut all: Vec<&Entry> = self.entries.iter().collect();
        all.sort_by(|a, b| {
            b.week_start_date()
                .cmp(a.week_start_date())
                .then_with(|| b.created_at().cmp(&a.created_at()))
        });
        all
    }

    /// Entries of the selected week, in the order they were added.
    pub fn get_this_week(&self) -> Vec<&Entry> {
        let week = format_date(self.current_week_start);

        let mut list: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|e| e.week_start_date() == week)
            .collect();
        list.sort_by_key(|e| e.created_at());
        list
    }

    /// Entries whose bucket date lies in `[start, end]` (`YYYY-MM-DD`, compared
    /// as strings), ascending by that date.
    pub fn get_by_date_range(&self, start: &str, end: &str) -> Vec<&Entry> {
        let mut list: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|e| {
                let d = e.bucket_date();
                d >= start && d <= end
            })
            .collect();
        list.sort_by(|a, b| a.bucket_date().cmp(b.bucket_date()));
        list
    }

    /// Entries whose week starts within the current calendar month.
    pub fn get_this_month(&self) -> Vec<&Entry> {
        let (first, last) = month_bounds(self.clock.today());
        self.get_by_date_range(&format_date(first), &format_date(last))
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            week_total: self.get_this_week().iter().map(|e| e.hours()).sum(),
            month_total: self.get_this_month().iter().map(|e| e.hours()).sum(),
            total_count: self.entries.len(),
        }
    }

    /// Remember the category pair for the next `add`.
    pub fn remember_selection(&mut self, category: &str, subcategory: &str) -> bool {
        let a = self.storage.save(LAST_CATEGORY_KEY, category);
        let b = self.storage.save(LAST_SUBCATEGORY_KEY, subcategory);
        a && b
    }

    pub fn last_selection(&self) -> (Option<String>, Option<String>) {
        (
            self.storage.load(LAST_CATEGORY_KEY),
            self.storage.load(LAST_SUBCATEGORY_KEY),
        )
    }
}
