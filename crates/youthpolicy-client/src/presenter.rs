//! Search orchestration: Idle → Loading → Rendered, or back to Idle on failure.
//!
//! [`SearchPresenter`] owns the page number between searches. It collects
//! filters, asks a [`SearchBackend`] for a page, turns records into
//! [`ResultCard`]s and pushes everything to a [`SearchView`]. Searches take
//! `&mut self`, so a new one cannot start while another is in flight.

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{info, warn};
use youthpolicy_core::{
    CardOptions, FilterSelections, FilterSet, PAGE_SIZE, Pagination, ResultCard, SearchResultPage,
    build_cards,
};

use crate::{SearchError, SearchRequest};

/// Source of result pages.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResultPage, SearchError>;
}

/// Output side of the presenter. Implementations bind the view models to
/// whatever they draw on.
pub trait SearchView {
    /// Replace the results area with a loading placeholder.
    fn show_loading(&mut self);
    fn hide_loading(&mut self);
    fn show_cards(&mut self, cards: &[ResultCard]);
    /// The search succeeded with no results.
    fn show_empty(&mut self);
    fn clear_results(&mut self);
    fn show_total(&mut self, total: u64);
    /// `None` removes the controls.
    fn show_pagination(&mut self, pagination: Option<Pagination>);
    /// Blocking, user-facing message.
    fn notify(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterState {
    Idle,
    Loading,
    Rendered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenterConfig {
    pub page_size: u32,
    pub card: CardOptions,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            card: CardOptions::default(),
        }
    }
}

/// What one search ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Rendered { total: u64, shown: usize },
    Empty { total: u64 },
    Failed { message: String },
}

type TodayFn = Box<dyn Fn() -> NaiveDate + Send + Sync>;

pub struct SearchPresenter<B, V> {
    backend: B,
    view: V,
    config: PresenterConfig,
    state: PresenterState,
    current_page: u32,
    pagination: Option<Pagination>,
    today: TodayFn,
}

impl<B: SearchBackend, V: SearchView> SearchPresenter<B, V> {
    pub fn new(backend: B, view: V, config: PresenterConfig) -> Self {
        Self {
            backend,
            view,
            config,
            state: PresenterState::Idle,
            current_page: 1,
            pagination: None,
            today: Box::new(|| chrono::Local::now().date_naive()),
        }
    }

    /// Replace the clock used for deadline labels.
    pub fn with_today(mut self, today: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        self.today = Box::new(today);
        self
    }

    pub fn state(&self) -> PresenterState {
        self.state
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Controls from the last rendered page.
    pub fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Run a search for `page` and render its outcome.
    ///
    /// Failures never escape: they end up as a notification on the view and
    /// [`SearchOutcome::Failed`].
    pub async fn perform_search(
        &mut self,
        query: &str,
        selections: &FilterSelections,
        page: u32,
    ) -> SearchOutcome {
        let page = page.max(1);
        self.current_page = page;

        let request = SearchRequest {
            query: query.trim().to_string(),
            page,
            page_size: self.config.page_size,
            filters: FilterSet::collect(selections),
        };

        self.state = PresenterState::Loading;
        self.view.show_loading();

        let outcome = match self.backend.search(&request).await {
            Ok(result) => self.render(result, page),
            Err(err) => self.fail(&err),
        };

        self.view.hide_loading();
        outcome
    }

    /// Search the page after the current one. `None` when already on the
    /// last page or nothing has been rendered.
    pub async fn next_page(
        &mut self,
        query: &str,
        selections: &FilterSelections,
    ) -> Option<SearchOutcome> {
        let next = self.pagination?.next()?;
        Some(self.perform_search(query, selections, next).await)
    }

    /// Search the page before the current one. `None` on the first page.
    pub async fn previous_page(
        &mut self,
        query: &str,
        selections: &FilterSelections,
    ) -> Option<SearchOutcome> {
        let previous = self.pagination?.previous()?;
        Some(self.perform_search(query, selections, previous).await)
    }

    fn render(&mut self, result: SearchResultPage, requested_page: u32) -> SearchOutcome {
        let page = if result.page == 0 {
            requested_page
        } else {
            result.page
        };
        let page_size = if result.page_size == 0 {
            self.config.page_size
        } else {
            result.page_size
        };

        let outcome = if result.results.is_empty() {
            self.view.show_empty();
            SearchOutcome::Empty {
                total: result.total,
            }
        } else {
            let cards = build_cards(&result.results, (self.today)(), &self.config.card);
            self.view.show_cards(&cards);
            SearchOutcome::Rendered {
                total: result.total,
                shown: cards.len(),
            }
        };

        self.pagination = Pagination::compute(result.total, page, page_size);
        self.view.show_total(result.total);
        self.view.show_pagination(self.pagination);
        self.state = PresenterState::Rendered;

        info!(total = result.total, page, "search results rendered");
        outcome
    }

    fn fail(&mut self, err: &SearchError) -> SearchOutcome {
        warn!(error = %err, "search failed");
        let message = err.user_message();
        self.pagination = None;
        self.view.clear_results();
        self.view.notify(&message);
        self.state = PresenterState::Idle;
        SearchOutcome::Failed { message }
    }
}
