//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Default page size for list endpoints.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for list endpoints.
const MAX_LIMIT: i64 = 100;

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Page size clamped into `1..=100`, defaulting to 50.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Offset, never negative.
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_clamping() {
        let p = PaginationParams::default();
        assert_eq!(p.limit(), DEFAULT_LIMIT);
        assert_eq!(p.offset(), 0);

        let p = PaginationParams {
            limit: Some(5000),
            offset: Some(-3),
        };
        assert_eq!(p.limit(), MAX_LIMIT);
        assert_eq!(p.offset(), 0);
    }
}
