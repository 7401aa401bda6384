//! Check-out and return: the only code allowed to change lending state.
//!
//! An item's state and its holder's list of held titles always change
//! together. Every precondition is checked before either record is touched,
//! so a refused operation leaves both stores exactly as they were.

use crate::{
    borrower::Borrower,
    catalog::Catalog,
    directory::BorrowerDirectory,
    error::{LendingError, LendingResult},
    events::LendingEvent,
    item::{Item, ItemState},
    keys::same_key,
};

/// The records touched by a successful operation
#[derive(Debug, Clone, Copy)]
pub struct Loan<'a> {
    /// Item after the transition
    pub item: &'a Item,
    /// Borrower after the transition
    pub borrower: &'a Borrower,
}

impl Loan<'_> {
    /// Describe this transition as a check-out event
    #[must_use]
    pub fn checked_out_event(&self) -> LendingEvent {
        LendingEvent::CheckedOut {
            title: self.item.title().to_string(),
            borrower_id: self.borrower.id().to_string(),
            borrower_name: self.borrower.name().to_string(),
        }
    }

    /// Describe this transition as a return event
    #[must_use]
    pub fn returned_event(&self) -> LendingEvent {
        LendingEvent::Returned {
            title: self.item.title().to_string(),
            borrower_id: self.borrower.id().to_string(),
            borrower_name: self.borrower.name().to_string(),
        }
    }
}

/// Performs check-outs and returns against a catalog and a borrower directory.
///
/// The engine owns no data. It borrows both stores for as long as it lives.
#[derive(Debug)]
pub struct LendingEngine<'a> {
    /// Item store
    catalog: &'a mut Catalog,
    /// Borrower store
    directory: &'a mut BorrowerDirectory,
}

impl<'a> LendingEngine<'a> {
    /// Create an engine over the given stores
    #[must_use]
    pub fn new(catalog: &'a mut Catalog, directory: &'a mut BorrowerDirectory) -> Self {
        Self { catalog, directory }
    }

    /// Lend the item titled `title` to the borrower `borrower_id`.
    ///
    /// Both keys match case-insensitively; with duplicate keys the first
    /// record wins. On success the item records the borrower's registered
    /// id as holder and the borrower's held titles gain the item's title.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `LendingError::BorrowerNotFound` if no borrower has that id
    /// - `LendingError::ItemNotFound` if no item has that title
    /// - `LendingError::AlreadyCheckedOut` if the item is lent to anyone
    pub fn check_out(&mut self, borrower_id: &str, title: &str) -> LendingResult<Loan<'_>> {
        let borrower = self
            .directory
            .find_by_id_mut(borrower_id)
            .ok_or_else(|| LendingError::BorrowerNotFound { id: borrower_id.to_string() })?;
        let item = self
            .catalog
            .find_by_title_mut(title)
            .ok_or_else(|| LendingError::ItemNotFound { title: title.to_string() })?;

        if !item.is_available() {
            return Err(LendingError::AlreadyCheckedOut { title: item.title().to_string() });
        }

        item.set_state(ItemState::CheckedOut(borrower.id().to_string()));
        borrower.push_title(item.title());

        Ok(Loan { item, borrower })
    }

    /// Take back the item titled `title` from the borrower `borrower_id`.
    ///
    /// Removes one occurrence (the first) of the title from the borrower's
    /// held titles and makes the item available again.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `LendingError::BorrowerNotFound` if no borrower has that id
    /// - `LendingError::ItemNotFound` if no item has that title
    /// - `LendingError::NotHeldByThisBorrower` if the item is available or
    ///   held by somebody else
    pub fn return_item(&mut self, borrower_id: &str, title: &str) -> LendingResult<Loan<'_>> {
        let borrower = self
            .directory
            .find_by_id_mut(borrower_id)
            .ok_or_else(|| LendingError::BorrowerNotFound { id: borrower_id.to_string() })?;
        let item = self
            .catalog
            .find_by_title_mut(title)
            .ok_or_else(|| LendingError::ItemNotFound { title: title.to_string() })?;

        let held_here = item.holder().is_some_and(|holder| same_key(holder, borrower.id()));
        if !held_here {
            return Err(LendingError::NotHeldByThisBorrower {
                title: item.title().to_string(),
                borrower_id: borrower.id().to_string(),
            });
        }

        item.set_state(ItemState::Available);
        let removed = borrower.remove_title(item.title());
        debug_assert!(removed, "holder did not list '{}'", item.title());

        Ok(Loan { item, borrower })
    }
}
