//! Entry search use cases

use crate::domain::{Diary, DiaryEntry};
use crate::error::Result;
use chrono::{DateTime, Utc};

/// Entries whose diary text contains the word, ignoring case.
pub fn search_by_word(diary: &Diary, word: &str) -> Result<Vec<DiaryEntry>> {
    diary.entries.search_by_word(word)
}

/// Entries created strictly between the two instants.
pub fn search_by_date(
    diary: &Diary,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<DiaryEntry>> {
    diary.entries.search_by_date(from, to)
}
