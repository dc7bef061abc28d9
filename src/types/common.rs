//! Common types shared across the Xtreme API.

use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
///
/// Missing fields fall back to their defaults so partial payloads still
/// decode.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// 1-based page number.
    #[serde(default)]
    pub page_no: u64,

    /// Page size requested.
    #[serde(default)]
    pub page_size: u64,

    /// Total number of items across all pages.
    #[serde(default)]
    pub total: u64,

    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

impl<T> Page<T> {
    /// Returns the number of items on this page.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns true if more items exist after this page.
    ///
    /// Without a page number and size only the items on this page are
    /// counted against `total`.
    pub fn has_more(&self) -> bool {
        if self.page_no == 0 || self.page_size == 0 {
            return (self.list.len() as u64) < self.total;
        }
        self.page_no.saturating_mul(self.page_size) < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_decodes_partial_payload() {
        let page: Page<u64> = serde_json::from_str(r#"{"total":3,"list":[1,2]}"#).unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.len(), 2);
        assert_eq!(page.page_no, 0);
    }

    #[test]
    fn test_page_has_more() {
        let page: Page<u64> =
            serde_json::from_str(r#"{"pageNo":1,"pageSize":2,"total":3,"list":[1,2]}"#).unwrap();
        assert!(page.has_more());

        let last: Page<u64> =
            serde_json::from_str(r#"{"pageNo":2,"pageSize":2,"total":3,"list":[3]}"#).unwrap();
        assert!(!last.has_more());
    }

    #[test]
    fn test_partial_page_has_more_counts_items() {
        let complete: Page<u64> = serde_json::from_str(r#"{"total":2,"list":[1,2]}"#).unwrap();
        assert!(!complete.has_more());

        let partial: Page<u64> = serde_json::from_str(r#"{"total":3,"list":[1,2]}"#).unwrap();
        assert!(partial.has_more());

        let empty: Page<u64> = serde_json::from_str("{}").unwrap();
        assert!(!empty.has_more());
    }
}
