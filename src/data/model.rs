use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Mission outcome class. Serialised and displayed as `0` / `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Parse the integer class value. Anything but 0 or 1 is rejected.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.class()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the launch table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    /// Payload mass in kilograms, never negative.
    pub payload_kg: f64,
    pub booster: String,
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with indices derived once at load time.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches in file order.
    pub records: Vec<LaunchRecord>,
    /// Site names in first-seen order.
    sites: Vec<String>,
    /// Booster categories in first-seen order.
    booster_categories: Vec<String>,
    payload_bounds: (f64, f64),
}

impl LaunchDataset {
    /// Build the site / booster indices and payload bounds from the records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for rec in &records {
            if !sites.contains(&rec.site) {
                sites.push(rec.site.clone());
            }
            if !booster_categories.contains(&rec.booster) {
                booster_categories.push(rec.booster.clone());
            }
            min = min.min(rec.payload_kg);
            max = max.max(rec.payload_kg);
        }

        let payload_bounds = if records.is_empty() { (0.0, 0.0) } else { (min, max) };

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_bounds,
        }
    }

    /// Distinct launch sites in first-seen order.
    pub fn all_sites(&self) -> &[String] {
        &self.sites
    }

    /// Distinct booster version categories in first-seen order.
    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    /// `(min, max)` payload mass over all rows; `(0.0, 0.0)` when empty.
    pub fn payload_bounds(&self) -> (f64, f64) {
        self.payload_bounds
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
