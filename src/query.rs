//! Read-only access to the catalog and the borrower directory.

use crate::{
    borrower::Borrower,
    catalog::Catalog,
    directory::BorrowerDirectory,
    error::{LendingError, LendingResult},
    item::Item,
};

/// Listings and searches for display. Never changes lending state.
#[derive(Debug, Clone, Copy)]
pub struct QueryFacade<'a> {
    /// Item store
    catalog: &'a Catalog,
    /// Borrower store
    directory: &'a BorrowerDirectory,
}

impl<'a> QueryFacade<'a> {
    /// Create a facade over the given stores
    #[must_use]
    pub fn new(catalog: &'a Catalog, directory: &'a BorrowerDirectory) -> Self {
        Self { catalog, directory }
    }

    /// All items in catalog order
    #[must_use]
    pub fn items(&self) -> &'a [Item] {
        self.catalog.items()
    }

    /// All borrowers in registration order
    #[must_use]
    pub fn borrowers(&self) -> &'a [Borrower] {
        self.directory.borrowers()
    }

    /// Items whose author matches exactly, ignoring case
    #[must_use]
    pub fn items_by_author(&self, author: &str) -> Vec<&'a Item> {
        self.catalog.by_author(author).collect()
    }

    /// First item with the given title
    #[must_use]
    pub fn find_item(&self, title: &str) -> Option<&'a Item> {
        self.catalog.find_by_title(title)
    }

    /// First borrower with the given id
    #[must_use]
    pub fn find_borrower(&self, id: &str) -> Option<&'a Borrower> {
        self.directory.find_by_id(id)
    }

    /// The borrower with this id, for listing what they hold
    ///
    /// # Errors
    ///
    /// Returns `LendingError::BorrowerNotFound` if no borrower has that id.
    pub fn holdings_of(&self, id: &str) -> LendingResult<&'a Borrower> {
        self.find_borrower(id).ok_or_else(|| LendingError::BorrowerNotFound { id: id.to_string() })
    }
}
