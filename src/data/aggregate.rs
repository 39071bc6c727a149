use std::collections::BTreeMap;

use serde::Serialize;

use super::filter::{filter_by_site, SiteFilter};
use super::model::{LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Chart-ready data
// ---------------------------------------------------------------------------

/// One segment of the proportion (pie) chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: usize,
}

/// Category → count mapping for the proportion chart.
///
/// Categories are site names in "all sites" mode, outcome class labels
/// (`"0"`, `"1"`) in single-site mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProportionChart {
    pub title: String,
    pub slices: Vec<Slice>,
}

impl ProportionChart {
    /// Value for a category label, if the category is present.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.slices.iter().find(|s| s.label == label).map(|s| s.value)
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// One scatter point: payload vs outcome, coloured by booster category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationPoint {
    pub payload_kg: f64,
    pub class: Outcome,
    pub booster: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorrelationChart {
    pub title: String,
    pub points: Vec<CorrelationPoint>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Success count per site, sites in first-seen order. Sites without a
/// success still get a zero-valued slice.
pub fn success_counts_by_site(records: &[&LaunchRecord]) -> Vec<Slice> {
    let mut slices: Vec<Slice> = Vec::new();
    for rec in records {
        let success = usize::from(rec.outcome.is_success());
        match slices.iter_mut().find(|s| s.label == rec.site) {
            Some(slice) => slice.value += success,
            None => slices.push(Slice {
                label: rec.site.clone(),
                value: success,
            }),
        }
    }
    slices
}

/// Row count per outcome class, failures first. Only classes that occur are
/// present.
pub fn outcome_counts(records: &[&LaunchRecord]) -> Vec<Slice> {
    let mut counts: BTreeMap<Outcome, usize> = BTreeMap::new();
    for rec in records {
        *counts.entry(rec.outcome).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(outcome, value)| Slice {
            label: outcome.to_string(),
            value,
        })
        .collect()
}

/// Proportion chart slices for a site selection. The payload range is never
/// applied here.
pub fn proportions(records: &[&LaunchRecord], site: &SiteFilter) -> Vec<Slice> {
    match site {
        SiteFilter::All => success_counts_by_site(records),
        SiteFilter::Site(_) => outcome_counts(&filter_by_site(records, site)),
    }
}

/// Project already-filtered records to scatter points, preserving order.
pub fn correlation_points(records: &[&LaunchRecord]) -> Vec<CorrelationPoint> {
    records
        .iter()
        .map(|rec| CorrelationPoint {
            payload_kg: rec.payload_kg,
            class: rec.outcome,
            booster: rec.booster.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filter_by_payload, PayloadRange, Subset};
    use crate::data::model::tests::{record, two_site_dataset};
    use crate::data::model::LaunchDataset;

    fn slices(pairs: &[(&str, usize)]) -> Vec<Slice> {
        pairs
            .iter()
            .map(|&(label, value)| Slice {
                label: label.to_string(),
                value,
            })
            .collect()
    }

    fn larger_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 0.0, "v1.0", 0),
            record("CCAFS LC-40", 525.0, "v1.0", 0),
            record("VAFB SLC-4E", 500.0, "v1.1", 0),
            record("KSC LC-39A", 2490.0, "FT", 1),
            record("KSC LC-39A", 5300.0, "FT", 1),
            record("CCAFS SLC-40", 4600.0, "B4", 1),
            record("KSC LC-39A", 3600.0, "B5", 0),
            record("VAFB SLC-4E", 9600.0, "FT", 1),
        ])
    }

    #[test]
    fn test_all_sites_counts_successes_per_site() {
        let ds = two_site_dataset();
        let all: Subset = ds.records.iter().collect();
        assert_eq!(proportions(&all, &SiteFilter::All), slices(&[("A", 1), ("B", 1)]));
    }

    #[test]
    fn test_all_sites_keeps_zero_success_sites() {
        let ds = larger_dataset();
        let all: Subset = ds.records.iter().collect();
        let result = proportions(&all, &SiteFilter::All);
        assert_eq!(
            result,
            slices(&[
                ("CCAFS LC-40", 0),
                ("VAFB SLC-4E", 1),
                ("KSC LC-39A", 2),
                ("CCAFS SLC-40", 1),
            ])
        );
        let successes = ds.records.iter().filter(|r| r.outcome.is_success()).count();
        assert_eq!(result.iter().map(|s| s.value).sum::<usize>(), successes);
    }

    #[test]
    fn test_single_site_counts_outcomes() {
        let ds = two_site_dataset();
        let all: Subset = ds.records.iter().collect();
        let result = proportions(&all, &SiteFilter::from_value("A"));
        assert_eq!(result, slices(&[("0", 1), ("1", 1)]));
    }

    #[test]
    fn test_single_site_sum_is_site_row_count() {
        let ds = larger_dataset();
        let all: Subset = ds.records.iter().collect();
        for site in ds.all_sites() {
            let result = proportions(&all, &SiteFilter::from_value(site));
            let rows = ds.records.iter().filter(|r| &r.site == site).count();
            assert_eq!(result.iter().map(|s| s.value).sum::<usize>(), rows, "site {site}");
        }
    }

    #[test]
    fn test_single_site_only_present_classes() {
        let ds = two_site_dataset();
        let all: Subset = ds.records.iter().collect();
        assert_eq!(proportions(&all, &SiteFilter::from_value("B")), slices(&[("1", 1)]));
    }

    #[test]
    fn test_empty_input_gives_empty_chart_data() {
        assert!(proportions(&[], &SiteFilter::All).is_empty());
        assert!(proportions(&[], &SiteFilter::from_value("A")).is_empty());
        assert!(correlation_points(&[]).is_empty());

        let ds = two_site_dataset();
        let all: Subset = ds.records.iter().collect();
        assert!(proportions(&all, &SiteFilter::from_value("nowhere")).is_empty());
    }

    #[test]
    fn test_correlation_points_preserve_order() {
        let ds = two_site_dataset();
        let subset = filter_by_payload(&ds, PayloadRange::new(4000.0, 10_000.0));
        let points = correlation_points(&subset);

        let projected: Vec<(f64, Outcome, &str)> = points
            .iter()
            .map(|p| (p.payload_kg, p.class, p.booster.as_str()))
            .collect();
        assert_eq!(
            projected,
            [(5000.0, Outcome::Failure, "FT"), (9000.0, Outcome::Success, "B4")]
        );
    }

    #[test]
    fn test_proportion_chart_lookup() {
        let chart = ProportionChart {
            title: String::new(),
            slices: slices(&[("A", 3), ("B", 0)]),
        };
        assert_eq!(chart.get("A"), Some(3));
        assert_eq!(chart.get("B"), Some(0));
        assert_eq!(chart.get("C"), None);
        assert_eq!(chart.total(), 3);
    }
}
