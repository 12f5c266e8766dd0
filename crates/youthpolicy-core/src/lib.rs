//! Policy record types and the display rules applied to search results.

pub mod amount;
pub mod deadline;
pub mod filter;
pub mod page;
pub mod policy;
pub mod text;
pub mod view;

pub use amount::amount_text;
pub use deadline::{DeadlineLabel, deadline_label};
pub use filter::{FilterSelections, FilterSet};
pub use page::{PAGE_SIZE, Pagination};
pub use policy::{ApplyDates, Earn, ErrorBody, FilterOptions, PolicyRecord, SearchResultPage};
pub use view::{CardOptions, ResultCard, build_cards};
