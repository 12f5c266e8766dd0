//! HTTP client for the policy search API.

use async_trait::async_trait;
use reqwest::{Response, Url};
use tracing::{debug, info, warn};
use youthpolicy_core::{ErrorBody, FilterOptions, SearchResultPage};

use crate::presenter::SearchBackend;
use crate::{SearchError, SearchRequest};

const SEARCH_PATH: &str = "/search/api/search";
const FILTER_OPTIONS_PATH: &str = "/search/api/filter-options";
const DETAIL_PATH: &str = "/policy/";

/// Client for the search app's JSON endpoints.
pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Create a client for the given site base URL.
    ///
    /// `base_url` should be like `http://localhost:8000` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one page of policies matching `request`.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResultPage, SearchError> {
        let url = format!("{}{SEARCH_PATH}", self.base_url);

        info!(
            url = %url,
            query = %request.query,
            page = request.page,
            "searching policies"
        );
        let resp = self
            .client
            .get(&url)
            .query(&request.query_pairs())
            .send()
            .await?;
        let resp = check_status(resp).await?;

        let body = resp.text().await?;
        let page: SearchResultPage = serde_json::from_str(&body)?;
        info!(
            total = page.total,
            returned = page.results.len(),
            "search complete"
        );
        Ok(page)
    }

    /// Fetch the selectable filter values.
    pub async fn filter_options(&self) -> Result<FilterOptions, SearchError> {
        let url = format!("{}{FILTER_OPTIONS_PATH}", self.base_url);

        info!(url = %url, "loading filter options");
        let resp = self.client.get(&url).send().await?;
        let resp = check_status(resp).await?;

        let body = resp.text().await?;
        let options: FilterOptions = serde_json::from_str(&body)?;
        debug!(
            categories = options.categories.len(),
            regions = options.regions.len(),
            "filter options loaded"
        );
        Ok(options)
    }

    /// Detail page address for a policy.
    pub fn detail_url(&self, policy_id: &str) -> Result<Url, SearchError> {
        detail_url(&self.base_url, policy_id)
    }
}

/// Detail page address for a policy under `base_url`.
pub fn detail_url(base_url: &str, policy_id: &str) -> Result<Url, SearchError> {
    let base = format!("{}{DETAIL_PATH}", base_url.trim_end_matches('/'));
    Url::parse_with_params(&base, &[("id", policy_id)])
        .map_err(|e| SearchError::Other(format!("invalid detail url {base}: {e}")))
}

#[async_trait]
impl SearchBackend for SearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResultPage, SearchError> {
        SearchClient::search(self, request).await
    }
}

/// Turn a non-2xx response into [`SearchError::Server`], keeping the
/// server's `error` message when the body carries one.
async fn check_status(resp: Response) -> Result<Response, SearchError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.error);
    warn!(status = status.as_u16(), message = ?message, "search API returned an error");
    Err(SearchError::Server {
        status: status.as_u16(),
        message,
    })
}
