use std::fmt;

/// A completed lending transition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LendingEvent {
    /// An available item was lent to a borrower
    CheckedOut {
        /// Catalog title of the item
        title: String,
        /// Id of the new holder
        borrower_id: String,
        /// Display name of the new holder
        borrower_name: String,
    },
    /// A held item came back from its holder
    Returned {
        /// Catalog title of the item
        title: String,
        /// Id of the previous holder
        borrower_id: String,
        /// Display name of the previous holder
        borrower_name: String,
    },
}

impl LendingEvent {
    /// Catalog title of the item involved
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::CheckedOut { title, .. } | Self::Returned { title, .. } => title,
        }
    }

    /// Id of the borrower involved
    #[must_use]
    pub fn borrower_id(&self) -> &str {
        match self {
            Self::CheckedOut { borrower_id, .. } | Self::Returned { borrower_id, .. } => {
                borrower_id
            }
        }
    }

    /// Display name of the borrower involved
    #[must_use]
    pub fn borrower_name(&self) -> &str {
        match self {
            Self::CheckedOut { borrower_name, .. } | Self::Returned { borrower_name, .. } => {
                borrower_name
            }
        }
    }
}

impl fmt::Display for LendingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckedOut { title, borrower_id, borrower_name } => {
                write!(f, "'{title}' checked out to {borrower_name} ({borrower_id})")
            }
            Self::Returned { title, borrower_id, borrower_name } => {
                write!(f, "'{title}' returned by {borrower_name} ({borrower_id})")
            }
        }
    }
}
