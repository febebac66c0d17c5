//! Round-trip of the search text through a URL query string.
//!
//! The search box publishes its debounced value under one query parameter
//! so the current search is shareable and bookmarkable; the list view reads
//! it back on navigation. Unrelated parameters pass through untouched.

use url::form_urlencoded;

/// Query-string key the original client used.
pub const SEARCH_PARAM: &str = "searchquery";

/// Extract the search text from a query string (without the leading `?`).
/// Absent key decodes as the empty string.
#[must_use]
pub fn parse_search_query(query: &str) -> String {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == SEARCH_PARAM)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

/// Produce a query string with the search parameter set to `value`, or
/// removed entirely when `value` is empty. Other parameters are preserved
/// in order.
#[must_use]
pub fn with_search_query(query: &str, value: &str) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (key, existing) in form_urlencoded::parse(query.as_bytes()) {
        if key != SEARCH_PARAM {
            serializer.append_pair(&key, &existing);
        }
    }

    if !value.is_empty() {
        serializer.append_pair(SEARCH_PARAM, value);
    }

    serializer.finish()
}
