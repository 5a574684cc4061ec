//! Output formatting utilities

use crate::application::AuthorOverview;
use crate::domain::DiaryEntry;

/// Format a single entry in the diary's display layout.
pub fn format_entry(entry: &DiaryEntry) -> String {
    format!(
        "Author: {}\nTitle: {}\nActivity: {}\nDuration: {} minutes\nIntensity: {}\nDiary Text: {}\nCreated at: {}\n",
        entry.author(),
        entry.entry_title(),
        entry.activity_type(),
        entry.duration_minutes(),
        entry.intensity_level(),
        entry.diary_text(),
        entry.created_at().format("%d-%m-%Y %H:%M"),
    )
}

/// Format a list of entries separated by a divider line.
pub fn format_entry_list(entries: &[DiaryEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_entry(entry));
        output.push_str("**********\n");
    }
    output
}

/// Format the per-author entry counts.
pub fn format_author_overview(rows: &[AuthorOverview]) -> String {
    if rows.is_empty() {
        return "No authors found".to_string();
    }

    let mut output = String::new();
    for row in rows {
        output.push_str(&format!("{}  {} entries\n", row.author, row.entry_count));
    }
    output
}
