//! Diary entry entity and field validation

use crate::domain::Author;
use crate::error::{DiaryError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

fn non_blank(value: &str, field: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(DiaryError::InvalidArgument(format!(
            "{} cannot be blank",
            field
        )));
    }
    Ok(value.to_string())
}

fn checked_duration(minutes: u32) -> Result<u32> {
    if minutes == 0 {
        return Err(DiaryError::InvalidArgument(
            "duration must be longer than 0 minutes".to_string(),
        ));
    }
    Ok(minutes)
}

fn checked_intensity(level: u8) -> Result<u8> {
    if !(1..=10).contains(&level) {
        return Err(DiaryError::InvalidArgument(
            "intensity level must be between 1 and 10".to_string(),
        ));
    }
    Ok(level)
}

/// One logged workout session.
///
/// Every mutator validates its field and refreshes `last_modified` in the
/// same call; the author and `created_at` never change after construction.
/// Each entry carries a construction-assigned id, so two separately logged
/// sessions stay distinct even when every field matches.
#[derive(Debug, Clone, Serialize)]
pub struct DiaryEntry {
    id: Uuid,
    author: Author,
    entry_title: String,
    activity_type: String,
    diary_text: String,
    duration_minutes: u32,
    intensity_level: u8,
    created_at: DateTime<Utc>,
    last_modified: DateTime<Utc>,
}

impl DiaryEntry {
    /// Create a diary entry, validating every field.
    pub fn new(
        author: Author,
        entry_title: &str,
        activity_type: &str,
        diary_text: &str,
        duration_minutes: u32,
        intensity_level: u8,
    ) -> Result<Self> {
        let now = Utc::now();
        Ok(DiaryEntry {
            id: Uuid::new_v4(),
            author,
            entry_title: non_blank(entry_title, "entry title")?,
            activity_type: non_blank(activity_type, "activity type")?,
            diary_text: non_blank(diary_text, "diary text")?,
            duration_minutes: checked_duration(duration_minutes)?,
            intensity_level: checked_intensity(intensity_level)?,
            created_at: now,
            last_modified: now,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn entry_title(&self) -> &str {
        &self.entry_title
    }

    pub fn activity_type(&self) -> &str {
        &self.activity_type
    }

    pub fn diary_text(&self) -> &str {
        &self.diary_text
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn intensity_level(&self) -> u8 {
        self.intensity_level
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// Update the entry title. Fails when blank.
    pub fn set_entry_title(&mut self, entry_title: &str) -> Result<()> {
        self.entry_title = non_blank(entry_title, "entry title")?;
        self.touch();
        Ok(())
    }

    /// Update the activity type. Fails when blank.
    pub fn set_activity_type(&mut self, activity_type: &str) -> Result<()> {
        self.activity_type = non_blank(activity_type, "activity type")?;
        self.touch();
        Ok(())
    }

    /// Update the diary text. Fails when blank.
    pub fn set_diary_text(&mut self, diary_text: &str) -> Result<()> {
        self.diary_text = non_blank(diary_text, "diary text")?;
        self.touch();
        Ok(())
    }

    /// Update the workout duration. Fails when 0.
    pub fn set_duration_minutes(&mut self, duration_minutes: u32) -> Result<()> {
        self.duration_minutes = checked_duration(duration_minutes)?;
        self.touch();
        Ok(())
    }

    /// Update the intensity level. Fails outside 1..=10.
    pub fn set_intensity_level(&mut self, intensity_level: u8) -> Result<()> {
        self.intensity_level = checked_intensity(intensity_level)?;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.last_modified = Utc::now();
    }
}
