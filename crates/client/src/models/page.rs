//! Shared pagination envelope.

use serde::{Deserialize, Serialize};

/// Standard pagination envelope used by the products, orders, invoices,
/// and audit listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Total number of matching items.
    pub total: u64,
    /// Current page number (1-indexed).
    pub page: u32,
    /// Page size that was applied.
    pub limit: u32,
    /// Total number of pages.
    pub total_pages: u32,
}

/// Sort direction for listing filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_deserializes() {
        let json = r#"{"data":[1,2,3],"total":3,"page":1,"limit":10,"totalPages":1}"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn sort_order_is_uppercase_on_the_wire() {
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"DESC\"");
    }
}
