pub mod filters;
pub mod listing;

pub use filters::{FilterField, FilterValue, SearchFilters};
pub use listing::Listing;
