use youthpolicy_core::FilterSet;

/// One call to the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
    pub filters: FilterSet,
}

impl SearchRequest {
    /// Query parameters: `query`, `page`, `page_size`, then any set filters.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("query", self.query.clone()),
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        pairs.extend(self.filters.query_pairs());
        pairs
    }
}
