//! Plain-text rendering of library records.

use crate::{borrower::Borrower, item::Item};

/// Separator printed after each item block
const RULE: &str = "------------------------------------";

/// Text layouts for items, borrowers and holdings
#[derive(Debug)]
pub struct LibraryReport;

impl LibraryReport {
    /// Render one item as a multi-line block
    #[must_use]
    pub fn item_block(item: &Item) -> String {
        let status = if item.is_available() { "Available" } else { "Checked Out" };
        let holder = item
            .holder()
            .map(|holder| format!("  Checked out by borrower ID: {holder}\n"))
            .unwrap_or_default();
        format!(
            "  Title: {}\n  Author: {}\n  Year: {}\n  Status: {status}\n{holder}{RULE}\n",
            item.title(),
            item.author(),
            item.year()
        )
    }

    /// Render a list of items, or a notice when there are none
    #[must_use]
    pub fn item_list(items: &[&Item], empty_notice: &str) -> String {
        if items.is_empty() {
            return format!("{empty_notice}\n");
        }
        items.iter().map(|item| Self::item_block(item)).collect()
    }

    /// Render the borrower directory, one line per borrower
    #[must_use]
    pub fn borrower_list(borrowers: &[Borrower]) -> String {
        if borrowers.is_empty() {
            return "No borrowers registered yet.\n".to_string();
        }
        borrowers
            .iter()
            .map(|borrower| format!("Borrower: {} | ID: {}\n", borrower.name(), borrower.id()))
            .collect()
    }

    /// Render the titles held by one borrower
    #[must_use]
    pub fn holdings(borrower: &Borrower) -> String {
        if borrower.held_titles().is_empty() {
            return format!("{} has no items checked out.\n", borrower.name());
        }
        borrower.held_titles().iter().map(|title| format!("- {title}\n")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LibraryReport;
    use crate::{borrower::Borrower, item::Item};

    #[test]
    fn test_item_block_shows_holder_only_when_lent() {
        let dune = Item::new("Dune", "Frank Herbert", 1965);
        let block = LibraryReport::item_block(&dune);
        assert!(block.contains("Status: Available"));
        assert!(!block.contains("Checked out by"));
    }

    #[test]
    fn test_item_list_renders_each_item() {
        let dune = Item::new("Dune", "Frank Herbert", 1965);
        let emma = Item::new("Emma", "Jane Austen", 1815);
        let listing = LibraryReport::item_list(&[&dune, &emma], "Nothing here.");
        assert!(listing.contains("Title: Dune"));
        assert!(listing.contains("Author: Jane Austen"));
        assert_eq!(listing.matches("Status: Available").count(), 2);
    }

    #[test]
    fn test_empty_listings() {
        assert_eq!(LibraryReport::item_list(&[], "Nothing here."), "Nothing here.\n");
        assert_eq!(LibraryReport::borrower_list(&[]), "No borrowers registered yet.\n");
        let bob = Borrower::new("Bob", "P102");
        assert_eq!(LibraryReport::holdings(&bob), "Bob has no items checked out.\n");
    }
}
