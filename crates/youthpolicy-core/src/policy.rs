//! Wire types exchanged with the policy search endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A policy as returned by `/search/api/search`.
///
/// Every field is optional: the server omits whatever the source catalog
/// lacks, and the display rules fall back per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub policy_id: Option<String>,
    pub doc_id: Option<String>,
    pub policy_name: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    /// Preformatted amount, filled in by the server when it could build one.
    pub amount_text: Option<String>,
    pub earn: Option<Earn>,
    pub support_content: Option<String>,
    pub content: Option<String>,
    pub summary_text: Option<String>,
    pub dates: Option<ApplyDates>,
    pub supervising_agency: Option<String>,
    /// Vector-search relevance in `[0, 1]`.
    pub search_score: Option<f64>,
}

/// Support amount block.
///
/// `min_amt`/`max_amt` arrive as numbers or as strings with thousands
/// separators depending on the catalog source, so they stay loose JSON values
/// and are interpreted by [`crate::amount::parse_amount`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Earn {
    pub min_amt: Option<Value>,
    pub max_amt: Option<Value>,
    pub etc_content: Option<String>,
}

/// Application period block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplyDates {
    /// `"마감"` marks a closed policy regardless of the end date.
    pub apply_period_type: Option<String>,
    /// `YYYYMMDD`, or `"99991231"` for open-ended. Loose for the same reason
    /// as the amounts: some sources store it as a number.
    pub apply_period_end: Option<Value>,
}

impl ApplyDates {
    /// The end date as text, whatever JSON type carried it.
    pub fn end_text(&self) -> Option<String> {
        match self.apply_period_end.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResultPage {
    #[serde(default)]
    pub results: Vec<PolicyRecord>,
    /// Match count across all pages, not just this slice.
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
}

/// Error body paired with a non-2xx status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// Selectable values for the search filters, from `/search/api/filter-options`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub categories: Vec<String>,
    /// Category → its sub-categories.
    #[serde(default)]
    pub sub_categories: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub job_statuses: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
}
