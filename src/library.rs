use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{
    borrower::Borrower,
    catalog::Catalog,
    directory::BorrowerDirectory,
    engine::LendingEngine,
    error::LendingResult,
    events::LendingEvent,
    history::History,
    item::Item,
    observers::LendingObserver,
    query::QueryFacade,
};

/// Serializable view of every record in a [`Library`]
#[derive(Debug, Clone, Copy)]
pub struct LibrarySnapshot<'a> {
    /// Items in catalog order
    pub items: &'a [Item],
    /// Borrowers in registration order
    pub borrowers: &'a [Borrower],
}

impl Serialize for LibrarySnapshot<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("LibrarySnapshot", 2)?;
        state.serialize_field("items", self.items)?;
        state.serialize_field("borrowers", self.borrowers)?;
        state.end()
    }
}

/// The in-memory library: both stores plus the observers and history
/// that accompany lending operations.
pub struct Library {
    /// Item store
    catalog: Catalog,
    /// Borrower store
    directory: BorrowerDirectory,
    /// Registered transition observers
    observers: Vec<Box<dyn LendingObserver>>,
    /// Recent completed transitions
    history: History,
}

// Manual implementation of Debug for Library
impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("catalog", &self.catalog)
            .field("directory", &self.directory)
            .field("observers_count", &self.observers.len())
            .field("history", &self.history)
            .finish()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::with_history(History::default())
    }
}

impl Library {
    /// Create an empty library with the default history size
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty library using the given history
    #[must_use]
    pub fn with_history(history: History) -> Self {
        Self {
            catalog: Catalog::new(),
            directory: BorrowerDirectory::new(),
            observers: Vec::new(),
            history,
        }
    }

    /// Register an observer to be notified of completed transitions
    pub fn register_observer(&mut self, observer: Box<dyn LendingObserver>) {
        self.observers.push(observer);
    }

    /// Add an available item to the end of the catalog
    pub fn add_item(&mut self, title: &str, author: &str, year: i32) {
        tracing::debug!(%title, %author, year, "adding item");
        self.catalog.add(Item::new(title, author, year));
    }

    /// Register a borrower holding nothing
    pub fn register_borrower(&mut self, name: &str, id: &str) {
        tracing::debug!(%name, %id, "registering borrower");
        self.directory.add(Borrower::new(name, id));
    }

    /// Lend an item; see [`LendingEngine::check_out`].
    ///
    /// # Errors
    ///
    /// Returns the engine's `LendingError` unchanged; nothing is modified,
    /// recorded or observed in that case.
    pub fn check_out(&mut self, borrower_id: &str, title: &str) -> LendingResult<LendingEvent> {
        let outcome = LendingEngine::new(&mut self.catalog, &mut self.directory)
            .check_out(borrower_id, title)
            .map(|loan| loan.checked_out_event());
        self.settle(outcome, borrower_id, title)
    }

    /// Take an item back; see [`LendingEngine::return_item`].
    ///
    /// # Errors
    ///
    /// Returns the engine's `LendingError` unchanged; nothing is modified,
    /// recorded or observed in that case.
    pub fn return_item(&mut self, borrower_id: &str, title: &str) -> LendingResult<LendingEvent> {
        let outcome = LendingEngine::new(&mut self.catalog, &mut self.directory)
            .return_item(borrower_id, title)
            .map(|loan| loan.returned_event());
        self.settle(outcome, borrower_id, title)
    }

    /// Record and broadcast a successful transition, or log the rejection
    fn settle(
        &mut self,
        outcome: LendingResult<LendingEvent>,
        borrower_id: &str,
        title: &str,
    ) -> LendingResult<LendingEvent> {
        match outcome {
            Ok(event) => {
                for observer in &self.observers {
                    observer.on_transition(&event);
                }
                self.history.record(event.clone());
                Ok(event)
            }
            Err(err) => {
                tracing::debug!(%borrower_id, %title, error = %err, "lending operation rejected");
                Err(err)
            }
        }
    }

    /// Read-only listings and searches over both stores
    #[must_use]
    pub fn query(&self) -> QueryFacade<'_> {
        QueryFacade::new(&self.catalog, &self.directory)
    }

    /// Recent completed transitions
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Borrow every record for serialization
    #[must_use]
    pub fn snapshot(&self) -> LibrarySnapshot<'_> {
        LibrarySnapshot { items: self.catalog.items(), borrowers: self.directory.borrowers() }
    }

    /// Populate the demo collection used when the shell starts
    pub fn seed_demo_data(&mut self) {
        self.add_item("The Lord of the Rings", "J.R.R. Tolkien", 1954);
        self.add_item("1984", "George Orwell", 1949);
        self.add_item("Dune", "Frank Herbert", 1965);
        self.register_borrower("Alice", "P101");
        self.register_borrower("Bob", "P102");
    }
}
