//! Case-insensitive substring filtering over catalog items.
//!
//! The filter itself is allowed to return an empty set; the policy of what
//! to show when a query matches nothing belongs to the invocation layer, not
//! here.

use crate::types::CatalogItem;

/// Filter `items` by a free-text query.
///
/// An absent or blank query is the identity: the input comes back unchanged.
/// Otherwise the query is trimmed, lowercased, and matched as a substring
/// against the lowercased service name, variant name, and category; an item
/// survives if any of the three contains it. Relative order is preserved.
#[must_use]
pub fn filter_catalog(items: &[CatalogItem], query: Option<&str>) -> Vec<CatalogItem> {
    let needle = query.unwrap_or("").trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| {
            item.service.to_lowercase().contains(&needle)
                || item.variant.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, service: &str, variant: &str, category: &str) -> CatalogItem {
        CatalogItem {
            id,
            service: service.to_string(),
            variant: variant.to_string(),
            category: category.to_string(),
            ..CatalogItem::default()
        }
    }

    fn sample() -> Vec<CatalogItem> {
        vec![
            item(1, "Deep Home Cleaning", "San Francisco - 2BR", "cleaning"),
            item(2, "Handyman Visit", "Seattle", "repairs"),
            item(3, "Move-Out Cleaning", "Portland", "cleaning"),
            item(4, "Dog Walking", "Austin", "pets"),
        ]
    }

    #[test]
    fn test_absent_query_is_identity() {
        let items = sample();
        assert_eq!(filter_catalog(&items, None), items);
    }

    #[test]
    fn test_empty_and_whitespace_queries_are_identity() {
        let items = sample();
        assert_eq!(filter_catalog(&items, Some("")), items);
        assert_eq!(filter_catalog(&items, Some("   ")), items);
    }

    #[test]
    fn test_matches_any_of_service_variant_category() {
        let items = vec![
            item(1, "Query Here", "", ""),
            item(2, "", "query here", ""),
            item(3, "", "", "THE QUERY HERE"),
            item(4, "nothing", "nada", "none"),
        ];
        let filtered = filter_catalog(&items, Some("query"));
        let ids: Vec<i64> = filtered.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        let items = sample();
        let filtered = filter_catalog(&items, Some("  CLEANING "));
        let ids: Vec<i64> = filtered.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_preserves_input_order() {
        let items = sample();
        let filtered = filter_catalog(&items, Some("ing"));
        let ids: Vec<i64> = filtered.iter().map(|i| i.id).collect();
        // "ing" hits Cleaning (1, 3) and Dog Walking (4), in source order.
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_no_match_yields_empty_set() {
        let items = sample();
        assert!(filter_catalog(&items, Some("atlantis")).is_empty());
    }

    #[test]
    fn test_missing_fields_never_panic() {
        let items = vec![CatalogItem::default()];
        assert!(filter_catalog(&items, Some("anything")).is_empty());
    }
}
