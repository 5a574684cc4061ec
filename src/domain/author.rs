//! Author identity and id allocation

use crate::error::{DiaryError, Result};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Hands out author ids, starting at 1 and strictly increasing.
///
/// The allocator is passed explicitly to [`Author::new`] so that id
/// allocation stays local and resettable instead of living in a hidden
/// process-wide counter.
#[derive(Debug)]
pub struct AuthorIdAllocator {
    next: u32,
}

impl AuthorIdAllocator {
    pub fn new() -> Self {
        AuthorIdAllocator { next: 1 }
    }

    /// Take the next free id.
    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for AuthorIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// A diary contributor, unique by generated id even when names collide.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    id: u32,
    name: String,
}

impl Author {
    /// Create an author with the next id from the allocator.
    ///
    /// Fails when the name is blank.
    pub fn new(ids: &mut AuthorIdAllocator, name: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(DiaryError::InvalidArgument(
                "author name cannot be blank".to_string(),
            ));
        }
        Ok(Author {
            id: ids.allocate(),
            name: name.to_string(),
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

// Two authors are the same author exactly when their ids match; the name is
// display data and may collide.
impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}
