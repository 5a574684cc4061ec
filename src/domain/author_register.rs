//! In-memory register of authors

use crate::domain::Author;
use crate::error::{DiaryError, Result};

/// Stores and manages the authors of the diary.
///
/// Authors are kept in insertion order and deduplicated by id. Accessors
/// hand out copies so callers cannot mutate the register's internal state.
#[derive(Debug, Default)]
pub struct AuthorRegister {
    authors: Vec<Author>,
}

impl AuthorRegister {
    pub fn new() -> Self {
        AuthorRegister {
            authors: Vec::new(),
        }
    }

    /// Add an author to the register.
    ///
    /// Returns false when an author with the same id is already present.
    pub fn add_author(&mut self, author: Author) -> bool {
        if self.authors.iter().any(|a| a.id() == author.id()) {
            return false;
        }
        self.authors.push(author);
        true
    }

    /// All authors in insertion order, as a copy.
    pub fn all_authors(&self) -> Vec<Author> {
        self.authors.clone()
    }

    /// Number of authors in the register.
    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    /// All authors whose name matches exactly, ignoring case.
    ///
    /// Fails when the name is blank.
    pub fn search_by_name(&self, name: &str) -> Result<Vec<Author>> {
        if name.trim().is_empty() {
            return Err(DiaryError::InvalidArgument(
                "author name cannot be blank".to_string(),
            ));
        }
        let needle = name.to_lowercase();
        Ok(self
            .authors
            .iter()
            .filter(|a| a.name().to_lowercase() == needle)
            .cloned()
            .collect())
    }

    /// Look up an author by id; None when absent.
    pub fn author_by_id(&self, id: u32) -> Option<Author> {
        self.authors.iter().find(|a| a.id() == id).cloned()
    }

    /// Remove the author with the given id.
    ///
    /// Returns false when no author matches. Fails when the id is 0, which
    /// no allocator ever hands out.
    pub fn remove_author(&mut self, id: u32) -> Result<bool> {
        if id == 0 {
            return Err(DiaryError::InvalidArgument(
                "author id must be positive".to_string(),
            ));
        }
        match self.authors.iter().position(|a| a.id() == id) {
            Some(pos) => {
                self.authors.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AuthorIdAllocator;

    fn register_with(names: &[&str]) -> (AuthorRegister, Vec<Author>) {
        let mut ids = AuthorIdAllocator::new();
        let mut register = AuthorRegister::new();
        let mut authors = Vec::new();
        for name in names {
            let author = Author::new(&mut ids, name).unwrap();
            register.add_author(author.clone());
            authors.push(author);
        }
        (register, authors)
    }

    #[test]
    fn test_add_author_rejects_duplicate_id() {
        let mut ids = AuthorIdAllocator::new();
        let mut register = AuthorRegister::new();
        let bjorn = Author::new(&mut ids, "Bjorn").unwrap();

        assert!(register.add_author(bjorn.clone()));
        assert!(!register.add_author(bjorn));
        assert_eq!(register.author_count(), 1);
    }

    #[test]
    fn test_all_authors_preserves_insertion_order() {
        let (register, authors) = register_with(&["Bjorn", "Polo", "olav"]);
        let all = register.all_authors();
        assert_eq!(all, authors);
    }

    #[test]
    fn test_all_authors_is_a_copy() {
        let (register, _) = register_with(&["Bjorn"]);
        let mut all = register.all_authors();
        all.clear();
        assert_eq!(register.author_count(), 1);
    }

    #[test]
    fn test_search_by_name_ignores_case() {
        let (register, _) = register_with(&["Bjorn", "Polo"]);
        let found = register.search_by_name("bjorn").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "Bjorn");
    }

    #[test]
    fn test_search_by_name_is_exact_not_substring() {
        let (register, _) = register_with(&["Bjorn"]);
        assert!(register.search_by_name("bjo").unwrap().is_empty());
    }

    #[test]
    fn test_search_by_name_returns_all_name_collisions() {
        let (register, _) = register_with(&["Ola", "ola"]);
        let found = register.search_by_name("OLA").unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_search_by_name_rejects_blank() {
        let (register, _) = register_with(&["Bjorn"]);
        assert!(register.search_by_name("  ").is_err());
    }

    #[test]
    fn test_author_by_id() {
        let (register, authors) = register_with(&["Bjorn", "Polo"]);
        assert_eq!(register.author_by_id(authors[1].id()), Some(authors[1].clone()));
        assert_eq!(register.author_by_id(99), None);
    }

    #[test]
    fn test_remove_author_once_per_id() {
        let (mut register, authors) = register_with(&["Bjorn", "Polo"]);
        let id = authors[0].id();

        assert!(register.remove_author(id).unwrap());
        assert!(!register.remove_author(id).unwrap());
        assert_eq!(register.author_count(), 1);
    }

    #[test]
    fn test_remove_author_rejects_zero_id() {
        let (mut register, _) = register_with(&["Bjorn"]);
        assert!(register.remove_author(0).is_err());
        assert_eq!(register.author_count(), 1);
    }
}
