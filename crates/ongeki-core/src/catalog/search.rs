use super::song::SongEntry;

/// Result cap applied by [`crate::Catalog::search`] callers by default.
pub const DEFAULT_SEARCH_LIMIT: usize = 30;

/// Filter songs by a free-text query.
///
/// A query that looks like a constant (`14`, `13.7`) also matches any chart
/// whose constant formats to it at one decimal; everything else is a
/// case-insensitive title substring match.
pub(crate) fn search<'a>(songs: &'a [SongEntry], query: &str, limit: usize) -> Vec<&'a SongEntry> {
    let query = normalize_query(query);
    if query.is_empty() {
        return Vec::new();
    }
    let constant_query = is_constant_query(&query);

    songs
        .iter()
        .filter(|song| matches(song, &query, constant_query))
        .take(limit)
        .collect()
}

fn matches(song: &SongEntry, query: &str, constant_query: bool) -> bool {
    if song.title.to_lowercase().contains(query) {
        return true;
    }
    constant_query
        && song
            .charts
            .iter()
            .any(|chart| format!("{:.1}", chart.constant) == query)
}

/// Trim, lowercase, and fold full-width digits and the full-width period
/// to ASCII so `１４．２` matches like `14.2`.
fn normalize_query(query: &str) -> String {
    query
        .trim()
        .chars()
        .map(|c| match c {
            '０'..='９' | '．' => {
                char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
            }
            _ => c,
        })
        .collect::<String>()
        .to_lowercase()
}

/// Whole-number or one-decimal constant shape: `\d+` or `\d+.\d`.
fn is_constant_query(query: &str) -> bool {
    match query.split_once('.') {
        None => !query.is_empty() && query.bytes().all(|b| b.is_ascii_digit()),
        Some((integral, fraction)) => {
            !integral.is_empty()
                && integral.bytes().all(|b| b.is_ascii_digit())
                && fraction.len() == 1
                && fraction.bytes().all(|b| b.is_ascii_digit())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Catalog;

    use super::super::song::tests::FEED;
    use super::*;

    #[test]
    fn test_title_search_is_case_insensitive() {
        let catalog = Catalog::from_slice(FEED.as_bytes()).unwrap();
        let hits = catalog.search("titania", DEFAULT_SEARCH_LIMIT);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].internal_id, "8_STD");

        let hits = catalog.search("  APOLLO ", DEFAULT_SEARCH_LIMIT);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_constant_search() {
        let catalog = Catalog::from_slice(FEED.as_bytes()).unwrap();
        let hits = catalog.search("14.4", DEFAULT_SEARCH_LIMIT);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].internal_id, "8_STD");

        let hits = catalog.search("4.0", DEFAULT_SEARCH_LIMIT);
        assert!(hits.iter().any(|s| s.internal_id == "8_STD"));

        // Constants compare at one decimal, so a bare integer only ever
        // matches titles.
        assert!(catalog.search("4", DEFAULT_SEARCH_LIMIT).is_empty());
    }

    #[test]
    fn test_full_width_query_folds_to_ascii() {
        let catalog = Catalog::from_slice(FEED.as_bytes()).unwrap();
        let hits = catalog.search("１４．４", DEFAULT_SEARCH_LIMIT);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].internal_id, "8_STD");
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let catalog = Catalog::from_slice(FEED.as_bytes()).unwrap();
        assert!(catalog.search("   ", DEFAULT_SEARCH_LIMIT).is_empty());
    }

    #[test]
    fn test_limit_caps_results() {
        let catalog = Catalog::from_slice(FEED.as_bytes()).unwrap();
        // Every title here contains a vowel.
        assert_eq!(catalog.search("o", 2).len(), 2);
    }

    #[test]
    fn test_is_constant_query() {
        assert!(is_constant_query("14"));
        assert!(is_constant_query("13.7"));
        assert!(!is_constant_query("13.75"));
        assert!(!is_constant_query("13."));
        assert!(!is_constant_query(".7"));
        assert!(!is_constant_query("apollo"));
        assert!(!is_constant_query("14,2"));
    }
}
