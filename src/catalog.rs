//! Store owning every [`Item`] record.

use crate::{item::Item, keys::same_key};

/// Ordered collection of items. Insertion order is catalog order.
///
/// Titles are not required to be unique; lookups return the first match.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Items in insertion order
    items: Vec<Item>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item at the end of the catalog
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// First item whose title matches `title` case-insensitively
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Item> {
        self.items.iter().find(|item| same_key(item.title(), title))
    }

    /// Mutable form of [`Self::find_by_title`], reserved for the lending engine.
    pub(crate) fn find_by_title_mut(&mut self, title: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| same_key(item.title(), title))
    }

    /// All items by `author` (case-insensitive exact match), in catalog order
    pub fn by_author<'a>(&'a self, author: &str) -> impl Iterator<Item = &'a Item> {
        self.items.iter().filter(move |item| same_key(item.author(), author))
    }

    /// Items in catalog order
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::item::Item;

    #[test]
    fn test_find_by_title_is_case_insensitive() {
        let mut catalog = Catalog::new();
        catalog.add(Item::new("Dune", "Frank Herbert", 1965));

        let found = catalog.find_by_title("dune").map(Item::title);
        assert_eq!(found, Some("Dune"));
        assert!(catalog.find_by_title("Dune Messiah").is_none());
    }

    #[test]
    fn test_duplicate_titles_resolve_to_first_entry() {
        let mut catalog = Catalog::new();
        catalog.add(Item::new("Dune", "Frank Herbert", 1965));
        catalog.add(Item::new("DUNE", "Someone Else", 2021));

        let found = catalog.find_by_title("dune").map(Item::author);
        assert_eq!(found, Some("Frank Herbert"));
    }

    #[test]
    fn test_by_author_keeps_catalog_order() {
        let mut catalog = Catalog::new();
        catalog.add(Item::new("Animal Farm", "George Orwell", 1945));
        catalog.add(Item::new("Dune", "Frank Herbert", 1965));
        catalog.add(Item::new("1984", "George Orwell", 1949));

        let titles: Vec<&str> = catalog.by_author("george orwell").map(Item::title).collect();
        assert_eq!(titles, ["Animal Farm", "1984"]);
    }
}
