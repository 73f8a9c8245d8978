//! Postcode pattern matching.
//!
//! A coverage pattern is an exact code (`"76133"`) or a wildcard prefix
//! (`"762*"`) covering every code that shares the prefix before the marker.
//! Queries may carry a wildcard too. Matching is total: unparseable input
//! falls back to textual prefix comparison, it never fails.

/// Marker character denoting a wildcard prefix.
pub const WILDCARD: char = '*';

/// Number of significant characters in a full postcode.
const FULL_CODE_LEN: usize = 5;

/// Decide whether a coverage pattern matches a query.
///
/// Both sides are trimmed before comparison. Policy, in priority order:
///
/// 1. Wildcard pattern vs wildcard query: match when the stripped prefixes
///    overlap (either is a prefix of the other).
/// 2. Wildcard pattern vs full-length numeric query: match when the query
///    falls in the numeric range the pattern covers (`"7619*"` covers
///    76190..=76199).
/// 3. Wildcard pattern vs shorter query: textual prefix overlap, so
///    incremental typing keeps matching.
/// 4. Exact pattern vs wildcard query: match when the pattern starts with
///    the stripped query prefix.
/// 5. Exact vs exact: equality, or the pattern starts with the query
///    (partial typing).
pub fn matches_postcode(pattern: &str, query: &str) -> bool {
    let pattern = pattern.trim();
    let query = query.trim();

    if let Some(pattern_prefix) = pattern.strip_suffix(WILDCARD) {
        if let Some(query_prefix) = query.strip_suffix(WILDCARD) {
            return pattern_prefix.starts_with(query_prefix)
                || query_prefix.starts_with(pattern_prefix);
        }

        if query.chars().count() == FULL_CODE_LEN {
            if let Ok(code) = query.parse::<u64>() {
                return wildcard_range_contains(pattern_prefix, code);
            }
        }

        return query.starts_with(pattern_prefix) || pattern_prefix.starts_with(query);
    }

    if let Some(query_prefix) = query.strip_suffix(WILDCARD) {
        return pattern.starts_with(query_prefix);
    }

    pattern == query || pattern.starts_with(query)
}

/// True when `code` falls inside the numeric range a wildcard prefix
/// covers.
///
/// A numeric prefix of length n (n <= 4) covers 10^(5-n) consecutive
/// codes: `"7619"` covers 76190..=76199, `"7"` covers 70000..=79999. A
/// non-numeric or overlong prefix covers nothing.
fn wildcard_range_contains(prefix: &str, code: u64) -> bool {
    let Ok(prefix_number) = prefix.parse::<u64>() else {
        return false;
    };

    let prefix_len = prefix.chars().count();
    if prefix_len > FULL_CODE_LEN - 1 {
        return false;
    }

    let multiplier = 10u64.pow((FULL_CODE_LEN - prefix_len) as u32);
    let range_start = prefix_number * multiplier;
    let range_end = range_start + multiplier - 1;

    (range_start..=range_end).contains(&code)
}

// ===== Tests =====

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
