/// Menu filtering: derives the visible slice of the catalog from the
/// category pill, the search box, and the popular-only toggle.
use super::catalog::{Catalog, MenuEntry};

/// Sentinel category that matches every entry
pub const ALL_CATEGORIES: &str = "All";

/// What the operator is currently filtering the menu by
#[derive(Debug, Clone)]
pub struct FilterState {
    /// Selected category, or [`ALL_CATEGORIES`]
    pub category: String,
    /// Free-text search, matched case-insensitively against entry names
    pub search: String,
    /// Show only entries flagged as popular
    pub popular_only: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            popular_only: false,
        }
    }
}

/// The entries that survive the current filters, in catalog order.
/// A stable filter: nothing is re-sorted.
pub fn visible_entries<'a>(catalog: &'a Catalog, filters: &FilterState) -> Vec<&'a MenuEntry> {
    let query = filters.search.to_lowercase();

    catalog
        .entries()
        .iter()
        .filter(|entry| !filters.popular_only || entry.popular)
        .filter(|entry| filters.category == ALL_CATEGORIES || entry.category == filters.category)
        .filter(|entry| query.is_empty() || entry.name.to_lowercase().contains(&query))
        .collect()
}

/// `"All"` followed by each distinct category in first-occurrence order
pub fn available_categories(catalog: &Catalog) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];

    for entry in catalog.entries() {
        if !categories.contains(&entry.category) {
            categories.push(entry.category.clone());
        }
    }

    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filters_returns_full_catalog_in_order() {
        let catalog = Catalog::builtin();
        let visible = visible_entries(&catalog, &FilterState::default());

        assert_eq!(visible.len(), catalog.entries().len());
        let ids: Vec<u32> = visible.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::builtin();
        let filters = FilterState {
            category: "Drinks".into(),
            ..FilterState::default()
        };

        let visible = visible_entries(&catalog, &filters);
        assert!(visible.iter().all(|entry| entry.category == "Drinks"));
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = Catalog::builtin();

        let lower = FilterState {
            search: "momo".into(),
            ..FilterState::default()
        };
        let visible = visible_entries(&catalog, &lower);
        let names: Vec<&str> = visible.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["Momo", "Vegi Momo"]);

        let upper = FilterState {
            search: "MOMO".into(),
            ..FilterState::default()
        };
        assert_eq!(visible_entries(&catalog, &upper), visible);
    }

    #[test]
    fn test_popular_only() {
        let catalog = Catalog::builtin();
        let filters = FilterState {
            popular_only: true,
            ..FilterState::default()
        };

        let visible = visible_entries(&catalog, &filters);
        assert!(visible.iter().all(|entry| entry.popular));
        let ids: Vec<u32> = visible.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filters_combine() {
        let catalog = Catalog::builtin();
        let filters = FilterState {
            category: "Main".into(),
            search: "chowmein".into(),
            popular_only: true,
        };

        let visible = visible_entries(&catalog, &filters);
        let names: Vec<&str> = visible.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["Chicken Chowmein"]);
    }

    #[test]
    fn test_available_categories() {
        let catalog = Catalog::builtin();
        assert_eq!(
            available_categories(&catalog),
            vec!["All", "Main", "Sides", "Drinks"]
        );
    }
}
