use serde::Serialize;

/// Lending state of a single catalog item.
///
/// The holder reference only exists inside `CheckedOut`, so an item can never
/// be unavailable without a holder or available with one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ItemState {
    /// Item is on the shelf
    #[default]
    Available,
    /// Item is lent to the borrower with this id
    CheckedOut(String),
}

/// A lendable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Title as entered, used case-insensitively as the lookup key
    title: String,
    /// Author name
    author: String,
    /// Year of publication
    year: i32,
    /// Current lending state
    state: ItemState,
}

impl Item {
    /// Create a new item in the `Available` state
    #[must_use]
    pub fn new(title: &str, author: &str, year: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            state: ItemState::Available,
        }
    }

    /// Title with its original casing
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author name
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Year of publication
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Current lending state
    #[must_use]
    pub fn state(&self) -> &ItemState {
        &self.state
    }

    /// Whether the item can be checked out
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self.state, ItemState::Available)
    }

    /// Id of the borrower holding the item, if any
    #[must_use]
    pub fn holder(&self) -> Option<&str> {
        match &self.state {
            ItemState::Available => None,
            ItemState::CheckedOut(holder) => Some(holder),
        }
    }

    /// Replace the lending state. Only the lending engine calls this.
    pub(crate) fn set_state(&mut self, state: ItemState) {
        self.state = state;
    }
}
