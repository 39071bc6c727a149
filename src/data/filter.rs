use std::fmt;

use serde::Serialize;

use super::model::{LaunchDataset, LaunchRecord};
use crate::config::ALL_SITES;

// ---------------------------------------------------------------------------
// Filter predicates: which site, which payload window
// ---------------------------------------------------------------------------

/// A borrowed, order-preserving subset of the dataset's records.
pub type Subset<'a> = Vec<&'a LaunchRecord>;

/// Site selector value: the "all sites" sentinel or one concrete site.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(into = "String")]
pub enum SiteFilter {
    #[default]
    All,
    Site(String),
}

impl SiteFilter {
    /// Interpret a raw selector value. `"ALL"` is the sentinel; anything else
    /// names a site, known or not.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(value.to_string())
        }
    }

    /// The raw selector value this filter corresponds to.
    pub fn value(&self) -> &str {
        match self {
            SiteFilter::All => ALL_SITES,
            SiteFilter::Site(name) => name,
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(name) => record.site == *name,
        }
    }
}

impl From<SiteFilter> for String {
    fn from(filter: SiteFilter) -> Self {
        filter.value().to_string()
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteFilter::All => write!(f, "All Sites"),
            SiteFilter::Site(name) => write!(f, "{name}"),
        }
    }
}

/// Inclusive payload window in kg. `low > high` is a valid, empty window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    pub fn contains(&self, payload_kg: f64) -> bool {
        self.low <= payload_kg && payload_kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// Filter functions
// ---------------------------------------------------------------------------

/// All records whose payload lies in `range` (inclusive both ends), in
/// dataset order. An inverted range yields an empty subset.
pub fn filter_by_payload(dataset: &LaunchDataset, range: PayloadRange) -> Subset<'_> {
    dataset
        .records
        .iter()
        .filter(|rec| range.contains(rec.payload_kg))
        .collect()
}

/// Restrict `records` to one site. `All` passes everything through; an
/// unknown site name yields an empty subset.
pub fn filter_by_site<'a>(records: &[&'a LaunchRecord], site: &SiteFilter) -> Subset<'a> {
    records
        .iter()
        .copied()
        .filter(|rec| site.matches(rec))
        .collect()
}

/// Sites offered by the selector, narrowed by a case-insensitive search query.
pub fn site_options<'a>(dataset: &'a LaunchDataset, query: &str) -> Vec<&'a str> {
    let query = query.trim().to_lowercase();
    dataset
        .all_sites()
        .iter()
        .map(String::as_str)
        .filter(|site| query.is_empty() || site.to_lowercase().contains(&query))
        .collect()
}
