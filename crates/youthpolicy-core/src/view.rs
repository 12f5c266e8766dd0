//! Result card view model.
//!
//! A [`ResultCard`] carries every derived display value for one record.
//! Renderers bind these fields to their own output; nothing here produces
//! markup.

use chrono::NaiveDate;

use crate::amount::amount_text;
use crate::deadline::{DeadlineLabel, deadline_label};
use crate::policy::PolicyRecord;
use crate::text::{first_non_empty, truncate};

pub const SUMMARY_LIMIT: usize = 100;
pub const FALLBACK_CATEGORY: &str = "기타";
pub const FALLBACK_TITLE: &str = "정책명 없음";
pub const FALLBACK_SUMMARY: &str = "내용 없음";

/// Per-deployment display switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardOptions {
    /// Show the relevance score as a percentage.
    pub show_relevance: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    /// Target of the detail view; `None` makes the card non-interactive.
    pub policy_id: Option<String>,
    pub category: String,
    pub deadline: DeadlineLabel,
    pub title: String,
    pub amount: Option<String>,
    pub summary: String,
    pub agency: String,
    /// Rounded percentage, only when enabled and the record carries a score.
    pub relevance: Option<u32>,
}

impl ResultCard {
    pub fn build(record: &PolicyRecord, today: NaiveDate, options: &CardOptions) -> Self {
        let summary = first_non_empty([
            record.summary_text.as_deref(),
            record.support_content.as_deref(),
            record.content.as_deref(),
        ])
        .map(|s| truncate(s, SUMMARY_LIMIT))
        .unwrap_or_else(|| FALLBACK_SUMMARY.to_string());

        let relevance = if options.show_relevance {
            record
                .search_score
                .filter(|&s| s != 0.0 && s.is_finite())
                .map(percent)
        } else {
            None
        };

        Self {
            policy_id: record.policy_id.clone().filter(|id| !id.is_empty()),
            category: non_empty_or(record.category.as_deref(), FALLBACK_CATEGORY),
            deadline: deadline_label(record, today),
            title: non_empty_or(record.policy_name.as_deref(), FALLBACK_TITLE),
            amount: amount_text(record),
            summary,
            agency: record.supervising_agency.clone().unwrap_or_default(),
            relevance,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.policy_id.is_some()
    }

    /// Closed cards are shown muted.
    pub fn is_closed(&self) -> bool {
        self.deadline.is_closed()
    }
}

/// Build the cards for a page of records.
pub fn build_cards(
    records: &[PolicyRecord],
    today: NaiveDate,
    options: &CardOptions,
) -> Vec<ResultCard> {
    records
        .iter()
        .map(|r| ResultCard::build(r, today, options))
        .collect()
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    value.filter(|s| !s.is_empty()).unwrap_or(fallback).to_string()
}

/// Score in `[0, 1]` as a percentage, halves rounded up.
fn percent(score: f64) -> u32 {
    (score * 100.0 + 0.5).floor().clamp(0.0, u32::MAX as f64) as u32
}
