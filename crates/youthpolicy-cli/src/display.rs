//! Terminal rendering for search results.
//!
//! [`TerminalView`] is the CLI's [`SearchView`]: result cards and pagination
//! go to the output stream, loading and notifications to the status stream
//! (stderr in the binary) so piped output stays clean.

use std::io::{self, Write};

use youthpolicy_client::SearchView;
use youthpolicy_client::http::detail_url;
use youthpolicy_core::{FilterOptions, Pagination, ResultCard};

const LOADING: &str = "불러오는 중...";
const EMPTY: &str = "검색 결과가 없습니다.";
const PREVIOUS: &str = "이전";
const NEXT: &str = "다음";

const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

pub struct TerminalView<W, E> {
    out: W,
    status: E,
    base_url: String,
    /// Emit ANSI styling (closed cards are dimmed).
    color: bool,
    error: Option<io::Error>,
}

impl<W: Write, E: Write> TerminalView<W, E> {
    pub fn new(out: W, status: E, base_url: String, color: bool) -> Self {
        Self {
            out,
            status,
            base_url,
            color,
            error: None,
        }
    }

    /// First write failure since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    #[cfg(test)]
    fn into_parts(self) -> (W, E) {
        (self.out, self.status)
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result
            && self.error.is_none()
        {
            self.error = Some(e);
        }
    }

    fn write_card(&mut self, card: &ResultCard) -> io::Result<()> {
        let muted = card.is_closed() && self.color;
        if muted {
            write!(self.out, "{DIM}")?;
        }

        writeln!(self.out, "[{}] [{}]", card.category, card.deadline)?;
        writeln!(self.out, "=== {} ===", card.title)?;
        if let Some(amount) = &card.amount {
            writeln!(self.out, "  {amount}")?;
        }
        writeln!(self.out, "  {}", card.summary)?;
        if !card.agency.is_empty() {
            writeln!(self.out, "  {}", card.agency)?;
        }
        if let Some(relevance) = card.relevance {
            writeln!(self.out, "  관련도 {relevance}%")?;
        }
        if let Some(id) = &card.policy_id {
            match detail_url(&self.base_url, id) {
                Ok(url) => writeln!(self.out, "  -> {url}")?,
                Err(e) => tracing::debug!(policy_id = %id, error = %e, "no detail link"),
            }
        }

        if muted {
            write!(self.out, "{RESET}")?;
        }
        writeln!(self.out)
    }
}

impl<W: Write, E: Write> SearchView for TerminalView<W, E> {
    fn show_loading(&mut self) {
        let result = writeln!(self.status, "{LOADING}");
        self.record(result);
    }

    fn hide_loading(&mut self) {
        let result = self.out.flush();
        self.record(result);
    }

    fn show_cards(&mut self, cards: &[ResultCard]) {
        for card in cards {
            let result = self.write_card(card);
            self.record(result);
        }
    }

    fn show_empty(&mut self) {
        let result = writeln!(self.out, "{EMPTY}");
        self.record(result);
    }

    fn clear_results(&mut self) {
        // Nothing printed for this search yet; leave earlier output alone.
    }

    fn show_total(&mut self, total: u64) {
        let result = writeln!(self.out, "전체 {total}개 정책");
        self.record(result);
    }

    fn show_pagination(&mut self, pagination: Option<Pagination>) {
        let Some(p) = pagination else {
            return;
        };
        let result = writeln!(
            self.out,
            "{}  {}  {}",
            control(PREVIOUS, p.has_previous()),
            p.indicator(),
            control(NEXT, p.has_next()),
        );
        self.record(result);
    }

    fn notify(&mut self, message: &str) {
        let result = writeln!(self.status, "알림: {message}");
        self.record(result);
    }
}

/// `[label]` when usable, `(label)` when disabled.
fn control(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{label}]")
    } else {
        format!("({label})")
    }
}

/// Print the selectable filter values.
pub fn print_filter_options(out: &mut impl Write, options: &FilterOptions) -> io::Result<()> {
    writeln!(out, "Categories")?;
    for category in &options.categories {
        let subs = options
            .sub_categories
            .get(category)
            .map(|s| s.join(", "))
            .unwrap_or_default();
        writeln!(out, "  {:<26} {}", category, subs)?;
    }
    writeln!(out)?;

    print_list(out, "Job statuses", &options.job_statuses)?;
    print_list(out, "Regions", &options.regions)?;
    Ok(())
}

fn print_list(out: &mut impl Write, header: &str, items: &[String]) -> io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "{header}")?;
    writeln!(out, "  {}", items.join(", "))?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use youthpolicy_core::{ApplyDates, CardOptions, DeadlineLabel, Earn, PolicyRecord};

    fn view(color: bool) -> TerminalView<Vec<u8>, Vec<u8>> {
        TerminalView::new(Vec::new(), Vec::new(), "http://localhost:8000".into(), color)
    }

    fn output(view: TerminalView<Vec<u8>, Vec<u8>>) -> (String, String) {
        let (out, status) = view.into_parts();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(status).unwrap(),
        )
    }

    fn card(closed: bool) -> ResultCard {
        let record = PolicyRecord {
            policy_id: Some("R2025 01".into()),
            policy_name: Some("청년 구직활동 지원금".into()),
            category: Some("일자리".into()),
            earn: Some(Earn {
                max_amt: Some(json!(3_000_000)),
                ..Default::default()
            }),
            support_content: Some("구직활동 지원".into()),
            supervising_agency: Some("고용노동부".into()),
            search_score: Some(0.9),
            dates: Some(ApplyDates {
                apply_period_type: closed.then(|| "마감".to_string()),
                apply_period_end: Some(json!("20261031")),
            }),
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        ResultCard::build(
            &record,
            today,
            &CardOptions {
                show_relevance: true,
            },
        )
    }

    #[test]
    fn card_lines() {
        let mut v = view(false);
        v.show_cards(&[card(false)]);
        let (out, _) = output(v);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "[일자리] [D-12]");
        assert_eq!(lines[1], "=== 청년 구직활동 지원금 ===");
        assert_eq!(lines[2], "  최대 3,000,000원");
        assert_eq!(lines[3], "  구직활동 지원");
        assert_eq!(lines[4], "  고용노동부");
        assert_eq!(lines[5], "  관련도 90%");
        assert_eq!(lines[6], "  -> http://localhost:8000/policy/?id=R2025+01");
    }

    #[test]
    fn card_without_id_has_no_link() {
        let mut c = card(false);
        c.policy_id = None;
        c.amount = None;
        let mut v = view(false);
        v.show_cards(&[c]);
        let (out, _) = output(v);
        assert!(!out.contains("->"));
        assert!(!out.contains("3,000,000"));
    }

    #[test]
    fn closed_card_is_dimmed_only_with_color() {
        let closed = card(true);
        assert_eq!(closed.deadline, DeadlineLabel::Closed);

        let mut v = view(true);
        v.show_cards(&[closed.clone()]);
        let (out, _) = output(v);
        assert!(out.starts_with(DIM));
        assert!(out.contains("[마감]"));
        assert!(out.contains(RESET));

        let mut v = view(true);
        v.show_cards(&[card(false)]);
        let (out, _) = output(v);
        assert!(!out.contains(DIM));

        let mut v = view(false);
        v.show_cards(&[closed]);
        let (out, _) = output(v);
        assert!(!out.contains(DIM));
    }

    #[test]
    fn pagination_controls() {
        let mut v = view(false);
        v.show_pagination(Pagination::compute(45, 1, 20));
        v.show_pagination(Pagination::compute(45, 3, 20));
        v.show_pagination(Pagination::compute(10, 1, 20));
        let (out, _) = output(v);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["(이전)  1 / 3  [다음]", "[이전]  3 / 3  (다음)"]);
    }

    #[test]
    fn loading_empty_and_notification() {
        let mut v = view(false);
        v.show_loading();
        v.show_empty();
        v.show_total(0);
        v.notify("invalid filter");
        v.hide_loading();
        assert!(v.take_error().is_none());
        let (out, status) = output(v);
        assert_eq!(out, format!("{EMPTY}\n전체 0개 정책\n"));
        assert_eq!(status, format!("{LOADING}\n알림: invalid filter\n"));
    }

    #[test]
    fn filter_options_listing() {
        let options = FilterOptions {
            categories: vec!["일자리".into(), "교육".into()],
            sub_categories: [("일자리".to_string(), vec!["취업".into(), "창업".into()])]
                .into_iter()
                .collect(),
            job_statuses: vec!["미취업자".into()],
            regions: Vec::new(),
        };
        let mut out = Vec::new();
        print_filter_options(&mut out, &options).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("취업, 창업"));
        assert!(out.contains("Job statuses\n  미취업자\n"));
        assert!(!out.contains("Regions"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_kept() {
        let mut v = TerminalView::new(FailingWriter, Vec::new(), String::new(), false);
        v.show_total(3);
        v.show_total(4);
        let err = v.take_error().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(v.take_error().is_none());
    }
}
