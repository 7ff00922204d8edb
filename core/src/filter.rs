//! Category filtering for the project grid.

use folio_types::Project;

/// Category key meaning "no filtering".
pub const ALL_CATEGORY: &str = "All";

/// Anything that belongs to exactly one category.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for Project {
    fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_key(key: &str) -> Self {
        if key == ALL_CATEGORY {
            Self::All
        } else {
            Self::Only(key.to_string())
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORY,
            Self::Only(category) => category,
        }
    }

    pub fn matches<T: Categorized + ?Sized>(&self, item: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category() == category,
        }
    }
}

/// Items matching `filter`, in their original order.
///
/// Unknown categories simply yield nothing.
pub fn filter_items<'a, T: Categorized>(items: &'a [T], filter: &CategoryFilter) -> Vec<&'a T> {
    items.iter().filter(|item| filter.matches(*item)).collect()
}

/// Filter chip keys: `All` first, then each category in first-seen order.
pub fn category_keys<T: Categorized>(items: &[T]) -> Vec<String> {
    let mut keys = vec![ALL_CATEGORY.to_string()];
    for item in items {
        if !keys.iter().any(|k| k == item.category()) {
            keys.push(item.category().to_string());
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: u32,
        category: &'static str,
    }

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.category
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: 1, category: "Game" },
            Item { id: 2, category: "Education" },
            Item { id: 3, category: "Game" },
        ]
    }

    fn ids(found: Vec<&Item>) -> Vec<u32> {
        found.into_iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_filter_by_category_keeps_order() {
        let items = items();
        assert_eq!(ids(filter_items(&items, &CategoryFilter::from_key("Game"))), vec![1, 3]);
    }

    #[test]
    fn test_all_sentinel_returns_everything() {
        let items = items();
        assert_eq!(ids(filter_items(&items, &CategoryFilter::from_key("All"))), vec![1, 2, 3]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let items = items();
        assert!(filter_items(&items, &CategoryFilter::from_key("Nonexistent")).is_empty());
    }

    #[test]
    fn test_category_keys() {
        assert_eq!(category_keys(&items()), vec!["All", "Game", "Education"]);
        assert_eq!(category_keys::<Item>(&[]), vec!["All"]);
    }

    #[test]
    fn test_key_round_trip() {
        assert_eq!(CategoryFilter::from_key("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_key("Game").key(), "Game");
        assert_eq!(CategoryFilter::default().key(), ALL_CATEGORY);
    }
}
