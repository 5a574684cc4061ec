//! Seeded demo diary

use crate::domain::{Author, AuthorIdAllocator, Diary, DiaryEntry};
use crate::error::Result;

/// Build the demo diary the CLI operates on: four authors with one logged
/// workout each, registered through the normal validating APIs.
pub fn sample_diary() -> Result<Diary> {
    let mut ids = AuthorIdAllocator::new();
    let mut diary = Diary::new();

    let bjorn = Author::new(&mut ids, "Bjorn")?;
    let polo = Author::new(&mut ids, "Polo")?;
    let olav = Author::new(&mut ids, "olav")?;
    let ola = Author::new(&mut ids, "ola")?;

    for author in [&bjorn, &polo, &olav, &ola] {
        diary.authors.add_author(author.clone());
    }

    diary.entries.add_entry(
        &bjorn,
        DiaryEntry::new(
            bjorn.clone(),
            "Jumping",
            "cardio",
            "Fun jumping day, burned the legs",
            20,
            4,
        )?,
    )?;
    diary.entries.add_entry(
        &polo,
        DiaryEntry::new(
            polo.clone(),
            "Arm curls",
            "strength",
            "Really tough arm day, made me get a huge pump",
            10,
            8,
        )?,
    )?;
    diary.entries.add_entry(
        &olav,
        DiaryEntry::new(
            olav.clone(),
            "evening run",
            "cardio",
            "Cold run, need to put on a jacket next time",
            15,
            2,
        )?,
    )?;
    diary.entries.add_entry(
        &ola,
        DiaryEntry::new(
            ola.clone(),
            "morning run",
            "running",
            "Great weather really warm",
            45,
            7,
        )?,
    )?;

    Ok(diary)
}
