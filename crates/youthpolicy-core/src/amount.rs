//! Support amount text for result cards.
//!
//! The amount shown on a card is picked in a fixed order:
//!
//! 1. the server-built `amount_text`, verbatim
//! 2. `earn.max_amt` / `earn.min_amt` as a range, "최대" or "최소" amount
//! 3. an amount phrase pulled out of `earn.etc_content`, then `support_content`
//!
//! Step 3 is pattern matching over free text. It is lossy: it finds the first
//! thing that looks like money and knows nothing about what the sentence says.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::policy::PolicyRecord;

const CURRENCY_SUFFIX: &str = "원";

/// Optional lead-in (monthly / yearly / up to / at least), a number with
/// thousands separators, an optional range, then a unit.
static AMOUNT_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:월|연|최대|최소)?\s*[0-9][0-9,]*(?:\s*[~-]\s*[0-9][0-9,]*)?\s*(?:억|만원|천원|원)",
    )
    .expect("amount phrase pattern is valid")
});

/// Interpret a loose JSON amount as a number.
///
/// Strings have their comma separators stripped before parsing. Anything
/// empty, unparseable, or non-finite is `None`, never zero.
pub fn parse_amount(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let cleaned: String = s.chars().filter(|&c| c != ',').collect();
            let cleaned = cleaned.trim();
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok()?
        }
        _ => return None,
    };
    parsed.is_finite().then_some(parsed)
}

/// Format an amount as `1,234,567원`.
pub fn format_money(value: f64) -> String {
    format!("{}{CURRENCY_SUFFIX}", group_thousands(value))
}

/// Digit grouping with `,`, keeping at most three fraction digits.
fn group_thousands(value: f64) -> String {
    let rendered = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Find the first amount phrase in free text, whitespace collapsed.
pub fn extract_amount(text: &str) -> Option<String> {
    let found = AMOUNT_PHRASE.find(text)?;
    Some(found.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Display amount for a record, or `None` when nothing should be shown.
pub fn amount_text(record: &PolicyRecord) -> Option<String> {
    if let Some(text) = record.amount_text.as_deref()
        && !text.is_empty()
    {
        return Some(text.to_string());
    }

    let earn = record.earn.as_ref();
    let min_amt = earn.and_then(|e| e.min_amt.as_ref()).and_then(parse_amount);
    let max_amt = earn.and_then(|e| e.max_amt.as_ref()).and_then(parse_amount);
    let positive_min = min_amt.filter(|&v| v > 0.0);

    match max_amt {
        Some(max) if max > 0.0 => {
            return Some(match positive_min {
                Some(min) => format!("{} ~ {}", format_money(min), format_money(max)),
                None => format!("최대 {}", format_money(max)),
            });
        }
        Some(max) if max == 0.0 => {
            return positive_min.map(|min| format!("최소 {}", format_money(min)));
        }
        _ => {}
    }

    if let Some(min) = positive_min {
        return Some(format!("최소 {}", format_money(min)));
    }

    let extracted = earn
        .and_then(|e| e.etc_content.as_deref())
        .and_then(extract_amount)
        .or_else(|| record.support_content.as_deref().and_then(extract_amount));
    if let Some(phrase) = &extracted {
        tracing::trace!(phrase = %phrase, "amount taken from free text");
    }
    extracted
}
