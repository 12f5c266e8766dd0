//! Search layer: the policy search API client and the presenter that drives a view from it.

mod error;
mod presenter;
mod request;

#[cfg(feature = "http")]
pub mod http;

pub use error::{GENERIC_FAILURE, SearchError};
pub use presenter::{
    PresenterConfig, PresenterState, SearchBackend, SearchOutcome, SearchPresenter, SearchView,
};
pub use request::SearchRequest;

#[cfg(feature = "http")]
pub use http::SearchClient;
