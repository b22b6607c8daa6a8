use serde::{Deserialize, Serialize, Serializer};

/// Substrings that mark a form field as numeric.
const NUMERIC_MARKERS: [&str; 4] = ["price", "mileage", "year", "score"];

/// The partial set of search constraints a user has specified.
///
/// `None` means "no constraint on this dimension" and is left out of the JSON
/// body entirely, which is not the same thing as a zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub min_year: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub max_year: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub min_price: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub max_price: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub max_mileage: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub min_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    // Pagination, never set by the form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Fields the search form exposes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Make,
    Model,
    MinYear,
    MaxYear,
    MinPrice,
    MaxPrice,
    MaxMileage,
    MinScore,
    Location,
}

impl FilterField {
    pub const ALL: [FilterField; 9] = [
        FilterField::Make,
        FilterField::Model,
        FilterField::MinYear,
        FilterField::MaxYear,
        FilterField::MinPrice,
        FilterField::MaxPrice,
        FilterField::MaxMileage,
        FilterField::MinScore,
        FilterField::Location,
    ];

    /// The form input name, which is also the JSON key.
    pub fn name(self) -> &'static str {
        match self {
            FilterField::Make => "make",
            FilterField::Model => "model",
            FilterField::MinYear => "min_year",
            FilterField::MaxYear => "max_year",
            FilterField::MinPrice => "min_price",
            FilterField::MaxPrice => "max_price",
            FilterField::MaxMileage => "max_mileage",
            FilterField::MinScore => "min_score",
            FilterField::Location => "location",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn is_numeric(self) -> bool {
        is_numeric_name(self.name())
    }
}

/// True when a field name marks numeric input (contains price, mileage, year or score).
pub fn is_numeric_name(name: &str) -> bool {
    NUMERIC_MARKERS.iter().any(|marker| name.contains(marker))
}

/// A non-empty value typed into a filter input.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Number(f64),
}

impl FilterValue {
    /// Reads raw input text for the named field.
    ///
    /// Empty text yields `None` (the field is unset). Numeric-named fields go
    /// through [`parse_number`], everything else stays text.
    pub fn from_input(name: &str, raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        if is_numeric_name(name) {
            Some(FilterValue::Number(parse_number(raw)))
        } else {
            Some(FilterValue::Text(raw.to_string()))
        }
    }

    fn into_number(self) -> f64 {
        match self {
            FilterValue::Number(n) => n,
            FilterValue::Text(text) => parse_number(&text),
        }
    }

    fn into_text(self) -> String {
        match self {
            FilterValue::Text(text) => text,
            FilterValue::Number(n) => n.to_string(),
        }
    }
}

/// Permissive text to number conversion.
///
/// Surrounding whitespace is ignored and blank text is zero. Anything that
/// still fails to parse becomes NaN, which serializes as JSON `null`.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

// Integral values go out as JSON integers (2015, not 2015.0); NaN becomes null.
fn serialize_number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    match *value {
        Some(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => serializer.serialize_i64(n as i64),
        Some(n) => serializer.serialize_f64(n),
        None => serializer.serialize_none(),
    }
}

impl SearchFilters {
    /// Returns a copy with `field` replaced by `value`, or removed when `value` is `None`.
    pub fn with_value(&self, field: FilterField, value: Option<FilterValue>) -> SearchFilters {
        let mut next = self.clone();
        let number = value.clone().map(FilterValue::into_number);
        let text = value.map(FilterValue::into_text);

        match field {
            FilterField::Make => next.make = text,
            FilterField::Model => next.model = text,
            FilterField::MinYear => next.min_year = number,
            FilterField::MaxYear => next.max_year = number,
            FilterField::MinPrice => next.min_price = number,
            FilterField::MaxPrice => next.max_price = number,
            FilterField::MaxMileage => next.max_mileage = number,
            FilterField::MinScore => next.min_score = number,
            FilterField::Location => next.location = text,
        }

        next
    }

    /// Current value of a form field, if set.
    pub fn value(&self, field: FilterField) -> Option<FilterValue> {
        let text = |v: &Option<String>| v.clone().map(FilterValue::Text);
        let number = |v: Option<f64>| v.map(FilterValue::Number);

        match field {
            FilterField::Make => text(&self.make),
            FilterField::Model => text(&self.model),
            FilterField::MinYear => number(self.min_year),
            FilterField::MaxYear => number(self.max_year),
            FilterField::MinPrice => number(self.min_price),
            FilterField::MaxPrice => number(self.max_price),
            FilterField::MaxMileage => number(self.max_mileage),
            FilterField::MinScore => number(self.min_score),
            FilterField::Location => text(&self.location),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == SearchFilters::default()
    }
}
