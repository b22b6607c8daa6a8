use crate::domain::{FilterField, FilterValue, SearchFilters};
use tracing::warn;

/// The in-progress filter a user is building.
///
/// Holds its own copy of the filter; nothing here talks to the backend; the
/// caller decides what a submitted filter does.
#[derive(Debug, Clone, Default)]
pub struct FilterForm {
    filters: SearchFilters,
}

impl FilterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays submitted `name=value` pairs as field changes, in order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut form = Self::new();
        for (name, raw) in pairs {
            form.change(name.as_ref(), raw.as_ref());
        }
        form
    }

    /// Builds a form from a URL query string such as `make=Toyota&min_year=2015`.
    pub fn from_query(query: Option<&str>) -> Self {
        let query = query.unwrap_or_default();
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    /// Applies one input change. Empty input unsets the field.
    pub fn change(&mut self, name: &str, raw: &str) {
        let Some(field) = FilterField::from_name(name) else {
            warn!(field = name, "ignoring unknown filter field");
            return;
        };

        let value = FilterValue::from_input(name, raw);
        self.filters = self.filters.with_value(field, value);
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Hands the accumulated filter to `on_search`.
    pub fn submit<R>(&self, on_search: impl FnOnce(&SearchFilters) -> R) -> R {
        on_search(&self.filters)
    }

    /// Clears every field, then hands the empty filter to `on_search`.
    pub fn reset<R>(&mut self, on_search: impl FnOnce(&SearchFilters) -> R) -> R {
        self.filters = SearchFilters::default();
        on_search(&self.filters)
    }
}
