//! Store owning every [`Borrower`] record.

use crate::{borrower::Borrower, keys::same_key};

/// Ordered collection of registered borrowers.
///
/// Id uniqueness is left to whoever registers borrowers; lookups return the
/// first match in registration order.
#[derive(Debug, Clone, Default)]
pub struct BorrowerDirectory {
    /// Borrowers in registration order
    borrowers: Vec<Borrower>,
}

impl BorrowerDirectory {
    /// Create an empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a borrower at the end of the directory
    pub fn add(&mut self, borrower: Borrower) {
        self.borrowers.push(borrower);
    }

    /// First borrower whose id matches `id` case-insensitively
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Borrower> {
        self.borrowers.iter().find(|borrower| same_key(borrower.id(), id))
    }

    /// Mutable form of [`Self::find_by_id`], reserved for the lending engine.
    pub(crate) fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Borrower> {
        self.borrowers.iter_mut().find(|borrower| same_key(borrower.id(), id))
    }

    /// Borrowers in registration order
    #[must_use]
    pub fn borrowers(&self) -> &[Borrower] {
        &self.borrowers
    }

    /// Number of registered borrowers
    #[must_use]
    pub fn len(&self) -> usize {
        self.borrowers.len()
    }

    /// Whether nobody is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.borrowers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::BorrowerDirectory;
    use crate::borrower::Borrower;

    #[test]
    fn test_find_by_id() {
        let mut directory = BorrowerDirectory::new();
        directory.add(Borrower::new("Alice", "P101"));
        directory.add(Borrower::new("Bob", "P102"));

        assert_eq!(directory.find_by_id("p102").map(Borrower::name), Some("Bob"));
        assert!(directory.find_by_id("P999").is_none());
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first_registration() {
        let mut directory = BorrowerDirectory::new();
        directory.add(Borrower::new("Alice", "P101"));
        directory.add(Borrower::new("Impostor", "p101"));

        assert_eq!(directory.find_by_id("P101").map(Borrower::name), Some("Alice"));
        assert_eq!(directory.len(), 2);
    }
}
