use serde::{Deserialize, Deserializer};

use crate::shared::constants::{DEFAULT_PRODUCT_LIMIT, PRODUCT_LIMIT_STEP};

/// Result of slicing a result set for the incremental loader.
///
/// The client asks for a growing prefix of the ordered result set; the
/// response tells it what limit to request next and whether anything is
/// left beyond the current prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    /// Number of rows to actually fetch (requested limit clamped to total)
    pub limit: i64,
    /// Limit the client should request to get the next, larger prefix
    pub next_limit: i64,
    /// Whether rows exist beyond the current prefix
    pub has_more: bool,
}

impl PageSlice {
    pub fn compute(requested: i64, total: i64) -> Self {
        let requested = if requested <= 0 {
            DEFAULT_PRODUCT_LIMIT
        } else {
            requested
        };

        Self {
            limit: requested.min(total),
            next_limit: requested.saturating_add(PRODUCT_LIMIT_STEP).min(total),
            has_more: requested < total,
        }
    }
}

/// Deserialize a limit query parameter leniently.
///
/// Query values arrive as strings; anything non-numeric falls back to the
/// default rather than rejecting the request.
pub fn lenient_limit<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse::<i64>().unwrap_or(DEFAULT_PRODUCT_LIMIT))
}

pub fn default_limit() -> i64 {
    DEFAULT_PRODUCT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_of_thirty() {
        let slice = PageSlice::compute(12, 30);
        assert_eq!(slice.limit, 12);
        assert_eq!(slice.next_limit, 24);
        assert!(slice.has_more);
    }

    #[test]
    fn test_exact_prefix_has_no_more() {
        let slice = PageSlice::compute(30, 30);
        assert_eq!(slice.limit, 30);
        assert_eq!(slice.next_limit, 30);
        assert!(!slice.has_more);
    }

    #[test]
    fn test_oversized_limit_is_clamped() {
        let slice = PageSlice::compute(100, 30);
        assert_eq!(slice.limit, 30);
        assert_eq!(slice.next_limit, 30);
        assert!(!slice.has_more);
    }

    #[test]
    fn test_max_limit_does_not_overflow() {
        let slice = PageSlice::compute(i64::MAX, 30);
        assert_eq!(slice.limit, 30);
        assert_eq!(slice.next_limit, 30);
        assert!(!slice.has_more);
    }

    #[test]
    fn test_non_positive_limit_falls_back_to_default() {
        let slice = PageSlice::compute(0, 30);
        assert_eq!(slice.limit, 12);
        assert_eq!(slice.next_limit, 24);
        assert!(slice.has_more);

        let slice = PageSlice::compute(-5, 30);
        assert_eq!(slice.limit, 12);
    }

    #[test]
    fn test_empty_result_set() {
        let slice = PageSlice::compute(12, 0);
        assert_eq!(slice.limit, 0);
        assert_eq!(slice.next_limit, 0);
        assert!(!slice.has_more);
    }

    #[derive(Debug, serde::Deserialize)]
    struct Query {
        #[serde(default = "default_limit", deserialize_with = "lenient_limit")]
        limit: i64,
    }

    #[test]
    fn test_lenient_limit_parses_numbers() {
        let q: Query = serde_urlencoded::from_str("limit=24").unwrap();
        assert_eq!(q.limit, 24);
    }

    #[test]
    fn test_lenient_limit_falls_back_on_garbage() {
        let q: Query = serde_urlencoded::from_str("limit=abc").unwrap();
        assert_eq!(q.limit, DEFAULT_PRODUCT_LIMIT);
    }

    #[test]
    fn test_lenient_limit_defaults_when_missing() {
        let q: Query = serde_urlencoded::from_str("").unwrap();
        assert_eq!(q.limit, DEFAULT_PRODUCT_LIMIT);
    }
}
