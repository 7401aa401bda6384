//! Lending desk for a small library catalog.
//!
//! Items are either available or lent to exactly one borrower, and the
//! item's holder always agrees with the borrower's list of held titles.
//! [`LendingEngine`] is the only code that changes either side of that
//! relationship; everything else reads, registers or presents.

pub mod borrower;
pub mod catalog;
pub mod config;
pub mod directory;
pub mod engine;
pub mod error;
pub mod events;
pub mod history;
pub mod item;
pub mod keys;
pub mod library;
pub mod observers;
pub mod query;
pub mod report;
pub mod shell;

pub use borrower::Borrower;
pub use catalog::Catalog;
pub use config::Config;
pub use directory::BorrowerDirectory;
pub use engine::{LendingEngine, Loan};
pub use error::{LendingError, LendingResult};
pub use events::LendingEvent;
pub use item::{Item, ItemState};
pub use library::Library;
pub use query::QueryFacade;
pub use shell::Shell;
