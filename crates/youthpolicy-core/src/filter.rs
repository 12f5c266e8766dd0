//! Search filters: raw UI selections in, request parameters out.

/// Selection value meaning "no constraint".
pub const ALL: &str = "all";

/// Filter values as the user left them, before validation.
///
/// String fields may be empty or hold [`ALL`]; `age` is whatever was typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelections {
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub age: Option<String>,
    pub region: Option<String>,
    pub job_status: Option<String>,
    pub open_only: bool,
}

/// Validated filters for one search call. Built fresh each time, never kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub category: Option<String>,
    /// Only ever set together with `category`.
    pub sub_category: Option<String>,
    pub age: Option<i64>,
    pub region: Option<String>,
    pub job_status: Option<String>,
    pub open_only: bool,
}

impl FilterSet {
    /// Validate the current selections.
    ///
    /// Empty and [`ALL`] values are dropped, the sub-category is ignored
    /// without a category, and age keeps its leading integer (a zero or
    /// unparseable age means no age constraint).
    pub fn collect(selections: &FilterSelections) -> Self {
        let category = constrained(selections.category.as_deref());
        let sub_category = category
            .as_ref()
            .and_then(|_| constrained(selections.sub_category.as_deref()));

        Self {
            category,
            sub_category,
            age: selections
                .age
                .as_deref()
                .and_then(leading_int)
                .filter(|&age| age != 0),
            region: constrained(selections.region.as_deref()),
            job_status: constrained(selections.job_status.as_deref()),
            open_only: selections.open_only,
        }
    }

    /// Query parameters for the search endpoint, in wire names.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(sub_category) = &self.sub_category {
            pairs.push(("subCategory", sub_category.clone()));
        }
        if let Some(age) = self.age {
            pairs.push(("age", age.to_string()));
        }
        if let Some(region) = &self.region {
            pairs.push(("region", region.clone()));
        }
        if let Some(job_status) = &self.job_status {
            pairs.push(("jobStatus", job_status.clone()));
        }
        if self.open_only {
            pairs.push(("openOnly", "true".to_string()));
        }
        pairs
    }
}

fn constrained(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != ALL)
        .map(String::from)
}

/// Parse the leading integer of `s`: `"25세"` is 25, `"abc"` is `None`.
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first().copied()? {
        b'-' => (-1, &s[1..]),
        b'+' => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
