//! Entries-by-author-name use case

use crate::domain::{Author, Diary, DiaryEntry};
use crate::error::Result;

/// Resolve authors by exact name match (ignoring case) and pair each with
/// their entries in insertion order.
pub fn entries_for_author_name(
    diary: &Diary,
    name: &str,
) -> Result<Vec<(Author, Vec<DiaryEntry>)>> {
    let authors = diary.authors.search_by_name(name)?;
    Ok(authors
        .into_iter()
        .map(|author| {
            let entries = diary.entries.entries_by_author(&author);
            (author, entries)
        })
        .collect())
}
