use serde::Serialize;

use crate::keys::same_key;

/// A registered person who may hold items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Borrower {
    /// Display name
    name: String,
    /// Identifier, compared case-insensitively
    id: String,
    /// Titles currently held, in checkout order
    held_titles: Vec<String>,
}

impl Borrower {
    /// Register a borrower holding nothing
    #[must_use]
    pub fn new(name: &str, id: &str) -> Self {
        Self { name: name.to_string(), id: id.to_string(), held_titles: Vec::new() }
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier as registered
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Titles currently held, oldest checkout first
    #[must_use]
    pub fn held_titles(&self) -> &[String] {
        &self.held_titles
    }

    /// Whether `title` is among the held titles (case-insensitive)
    #[must_use]
    pub fn holds(&self, title: &str) -> bool {
        self.held_titles.iter().any(|held| same_key(held, title))
    }

    /// Append a title at the end of the held list.
    pub(crate) fn push_title(&mut self, title: &str) {
        self.held_titles.push(title.to_string());
    }

    /// Remove the first held title equal to `title`, reporting whether one was found.
    pub(crate) fn remove_title(&mut self, title: &str) -> bool {
        match self.held_titles.iter().position(|held| same_key(held, title)) {
            Some(pos) => {
                self.held_titles.remove(pos);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Borrower;

    #[test]
    fn test_remove_title_takes_first_occurrence_only() {
        let mut bob = Borrower::new("Bob", "P102");
        bob.push_title("Dune");
        bob.push_title("1984");
        bob.push_title("dune");

        assert!(bob.remove_title("DUNE"));
        assert_eq!(bob.held_titles(), ["1984".to_string(), "dune".to_string()]);
    }

    #[test]
    fn test_remove_missing_title() {
        let mut bob = Borrower::new("Bob", "P102");
        bob.push_title("Dune");

        assert!(!bob.remove_title("1984"));
        assert_eq!(bob.held_titles(), ["Dune".to_string()]);
    }
}
