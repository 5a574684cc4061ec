//! Per-author entry count report

use crate::domain::{Author, Diary};

/// One report row: an author and how many entries they have logged.
#[derive(Debug, Clone)]
pub struct AuthorOverview {
    pub author: Author,
    pub entry_count: usize,
}

/// Entry counts for every author with a bucket in the diary register,
/// ordered by author id so the report is deterministic.
pub fn author_overview(diary: &Diary) -> Vec<AuthorOverview> {
    let mut rows: Vec<AuthorOverview> = diary
        .entries
        .entry_counts()
        .into_iter()
        .map(|(author, entry_count)| AuthorOverview {
            author,
            entry_count,
        })
        .collect();
    rows.sort_by_key(|row| row.author.id());
    rows
}
