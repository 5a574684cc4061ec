//! In-memory register of diary entries grouped by author

use crate::domain::{Author, DiaryEntry};
use crate::error::{DiaryError, Result};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Maps each author to the list of diary entries they have logged.
///
/// Per-author buckets keep insertion order; the order in which authors are
/// visited by the cross-author queries is unspecified. Queries return copies
/// of the stored entries.
#[derive(Debug, Default)]
pub struct DiaryRegister {
    entries: HashMap<Author, Vec<DiaryEntry>>,
}

impl DiaryRegister {
    pub fn new() -> Self {
        DiaryRegister {
            entries: HashMap::new(),
        }
    }

    /// Add an entry under the given author, creating the bucket if needed.
    ///
    /// Returns false without inserting when the same entry (by id) is
    /// already in the bucket. Fails when the entry was written by a
    /// different author than the one it is being registered under.
    pub fn add_entry(&mut self, author: &Author, entry: DiaryEntry) -> Result<bool> {
        if entry.author().id() != author.id() {
            return Err(DiaryError::InvalidArgument(
                "diary entry does not belong to this author".to_string(),
            ));
        }
        let bucket = self.entries.entry(author.clone()).or_default();
        if bucket.iter().any(|e| e.id() == entry.id()) {
            return Ok(false);
        }
        bucket.push(entry);
        Ok(true)
    }

    /// Remove an entry from the author's bucket.
    ///
    /// Returns false when the author has no bucket or the entry is not in it.
    pub fn delete_entry(&mut self, author: &Author, entry: &DiaryEntry) -> bool {
        match self.entries.get_mut(author) {
            Some(bucket) => match bucket.iter().position(|e| e.id() == entry.id()) {
                Some(pos) => {
                    bucket.remove(pos);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// All entries created strictly between the two instants, across all
    /// authors. Both bounds are exclusive.
    ///
    /// Fails when the from instant is after the to instant.
    pub fn search_by_date(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<DiaryEntry>> {
        if from > to {
            return Err(DiaryError::InvalidArgument(
                "from date cannot be after to date".to_string(),
            ));
        }
        Ok(self
            .entries
            .values()
            .flatten()
            .filter(|e| e.created_at() > from && e.created_at() < to)
            .cloned()
            .collect())
    }

    /// All entries across all authors, newest first.
    pub fn sorted_entries(&self) -> Vec<DiaryEntry> {
        let mut all: Vec<DiaryEntry> = self.entries.values().flatten().cloned().collect();
        all.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        all
    }

    /// Drop every bucket. Returns false when the register was already empty.
    pub fn clear_entries(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        true
    }

    /// The given author's entries in insertion order; empty when the author
    /// has no bucket.
    pub fn entries_by_author(&self, author: &Author) -> Vec<DiaryEntry> {
        self.entries.get(author).cloned().unwrap_or_default()
    }

    /// Entry count per author, one row per existing bucket.
    ///
    /// An author whose bucket was emptied by deletions still appears with a
    /// count of 0; an author never registered here is absent.
    pub fn entry_counts(&self) -> HashMap<Author, usize> {
        self.entries
            .iter()
            .map(|(author, bucket)| (author.clone(), bucket.len()))
            .collect()
    }

    /// All entries whose diary text contains the word, ignoring case.
    ///
    /// Fails when the word is blank.
    pub fn search_by_word(&self, word: &str) -> Result<Vec<DiaryEntry>> {
        if word.trim().is_empty() {
            return Err(DiaryError::InvalidArgument(
                "search word cannot be blank".to_string(),
            ));
        }
        let needle = word.to_lowercase();
        Ok(self
            .entries
            .values()
            .flatten()
            .filter(|e| e.diary_text().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
