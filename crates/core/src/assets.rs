//! Deterministic text-to-asset-URL resolution.
//!
//! Catalog entries rarely carry their own imagery, so the surface decorates
//! them with a stock photo chosen from the item's variant and service names.
//! Resolution is first-match in declared order, not longest-match: the order
//! of `ASSET_MAP` is a semantic contract. A multi-word key must be declared
//! before any shorter alias that could pre-empt it on the same input;
//! reordering entries silently changes resolution outcomes.

const ASSET_BASE: &str = "https://assets.harborlane.dev/cities";

/// Reserved key for the fallback asset.
pub const DEFAULT_KEY: &str = "default";

/// Ordered keyword-to-asset map. Keys are lowercase; the `default` entry is
/// skipped during the scan and used only as the fallback.
const ASSET_MAP: &[(&str, &str)] = &[
    (
        "san francisco",
        "https://assets.harborlane.dev/cities/san-francisco.jpg",
    ),
    ("sf", "https://assets.harborlane.dev/cities/san-francisco.jpg"),
    (
        "new york",
        "https://assets.harborlane.dev/cities/new-york.jpg",
    ),
    ("nyc", "https://assets.harborlane.dev/cities/new-york.jpg"),
    ("seattle", "https://assets.harborlane.dev/cities/seattle.jpg"),
    ("austin", "https://assets.harborlane.dev/cities/austin.jpg"),
    ("chicago", "https://assets.harborlane.dev/cities/chicago.jpg"),
    ("miami", "https://assets.harborlane.dev/cities/miami.jpg"),
    ("denver", "https://assets.harborlane.dev/cities/denver.jpg"),
    (
        "portland",
        "https://assets.harborlane.dev/cities/portland.jpg",
    ),
    (DEFAULT_KEY, "https://assets.harborlane.dev/cities/default.jpg"),
];

/// Resolve an asset URL for an item from its variant and service names.
///
/// The two inputs (empty string for absent) are joined with a space and
/// lowercased; the first map keyword contained in that text wins. Pure and
/// total: when nothing matches, the `default` asset is returned, so this
/// always yields a non-empty URL.
#[must_use]
pub fn resolve(variant: Option<&str>, service: Option<&str>) -> &'static str {
    let haystack = format!(
        "{} {}",
        variant.unwrap_or_default(),
        service.unwrap_or_default()
    )
    .to_lowercase();

    ASSET_MAP
        .iter()
        .filter(|(keyword, _)| *keyword != DEFAULT_KEY)
        .find(|(keyword, _)| haystack.contains(keyword))
        .map_or_else(default_asset, |(_, url)| url)
}

/// The fallback asset URL.
#[must_use]
pub fn default_asset() -> &'static str {
    ASSET_MAP
        .iter()
        .find(|(keyword, _)| *keyword == DEFAULT_KEY)
        .map_or(ASSET_BASE, |(_, url)| url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_total() {
        assert!(!resolve(None, None).is_empty());
        assert!(!resolve(Some(""), Some("")).is_empty());
        assert!(!resolve(Some("anything at all"), None).is_empty());
    }

    #[test]
    fn test_san_francisco_aliases_agree() {
        let by_name = resolve(Some("San Francisco"), Some(""));
        let by_alias = resolve(Some(""), Some("SF"));
        assert_eq!(by_name, by_alias);
        assert!(by_name.contains("san-francisco"));
    }

    #[test]
    fn test_unknown_text_falls_back_to_default() {
        let url = resolve(Some("Atlantis"), Some("Mystery Co"));
        assert_eq!(url, default_asset());
        assert!(url.contains("default"));
    }

    #[test]
    fn test_match_is_case_insensitive_over_joined_text() {
        assert!(resolve(Some("Weekly visit"), Some("SEATTLE Cleaners")).contains("seattle"));
    }

    #[test]
    fn test_specific_key_declared_before_contained_alias() {
        // "san francisco" contains no earlier key, and "sf" never pre-empts
        // it: both must land on the same asset.
        assert!(resolve(Some("san francisco sf"), None).contains("san-francisco"));
    }

    #[test]
    fn test_default_key_never_matches_literally() {
        // Text containing the word "default" is not a keyword hit.
        let url = resolve(Some("default setup"), None);
        assert_eq!(url, default_asset());
    }
}
