//! Business-rule failures reported by lending operations.

use thiserror::Error;

/// Result type alias for lending operations
pub type LendingResult<T> = Result<T, LendingError>;

/// Why a check-out or return was refused.
///
/// Every variant is an expected outcome; none of them leaves any record
/// modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LendingError {
    /// No borrower is registered under the given id
    #[error("borrower '{id}' not found")]
    BorrowerNotFound {
        /// Id as supplied by the caller
        id: String,
    },

    /// No catalog item has the given title
    #[error("item '{title}' not found")]
    ItemNotFound {
        /// Title as supplied by the caller
        title: String,
    },

    /// The item is already lent to someone
    #[error("'{title}' is already checked out")]
    AlreadyCheckedOut {
        /// Catalog title of the item
        title: String,
    },

    /// The item is either available or held by a different borrower.
    /// The two cases are deliberately reported the same way.
    #[error("'{title}' is not checked out to borrower '{borrower_id}'")]
    NotHeldByThisBorrower {
        /// Catalog title of the item
        title: String,
        /// Id of the borrower that attempted the return
        borrower_id: String,
    },
}
