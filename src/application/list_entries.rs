//! List entries use case

use crate::domain::{Diary, DiaryEntry};

/// All entries in the diary, newest first.
pub fn list_entries(diary: &Diary) -> Vec<DiaryEntry> {
    diary.entries.sorted_entries()
}
