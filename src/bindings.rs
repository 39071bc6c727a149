use serde::Serialize;

use crate::config::{PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN};
use crate::data::aggregate::{correlation_points, proportions, CorrelationChart, ProportionChart};
use crate::data::filter::{filter_by_payload, filter_by_site, PayloadRange, SiteFilter, Subset};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// Current values of the two filter controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub site: SiteFilter,
    pub payload: PayloadRange,
}

impl Selection {
    /// Startup selection: all sites, full observed payload range rounded
    /// outward to whole kilograms and clamped to the slider domain.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        let (min, max) = dataset.payload_bounds();
        let clamp = |v: f64| v.clamp(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX);
        Selection {
            site: SiteFilter::All,
            payload: PayloadRange::new(clamp(min.floor()), clamp(max.ceil())),
        }
    }
}

// ---------------------------------------------------------------------------
// Bindings: selection → chart data
// ---------------------------------------------------------------------------

/// Proportion chart binding. Depends on the site selection only.
pub fn proportion_chart(dataset: &LaunchDataset, site: &SiteFilter) -> ProportionChart {
    let title = match site {
        SiteFilter::All => "Total Successful Launches by Site".to_string(),
        SiteFilter::Site(name) => format!("Success vs Failure Launches for site {name}"),
    };
    let all: Subset = dataset.records.iter().collect();

    ProportionChart {
        title,
        slices: proportions(&all, site),
    }
}

/// Records behind the correlation chart: payload window first, then site.
pub fn correlation_subset<'a>(dataset: &'a LaunchDataset, selection: &Selection) -> Subset<'a> {
    filter_by_site(&filter_by_payload(dataset, selection.payload), &selection.site)
}

/// Correlation chart binding. Depends on both site and payload range.
pub fn correlation_chart(dataset: &LaunchDataset, selection: &Selection) -> CorrelationChart {
    let title = match &selection.site {
        SiteFilter::All => "Correlation between Payload and Success for All Sites".to_string(),
        SiteFilter::Site(name) => {
            format!("Correlation between Payload and Success for site {name}")
        }
    };

    CorrelationChart {
        title,
        points: correlation_points(&correlation_subset(dataset, selection)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{record, two_site_dataset};
    use crate::data::model::Outcome;

    #[test]
    fn test_initial_selection_uses_observed_bounds() {
        let ds = two_site_dataset();
        let sel = Selection::initial(&ds);
        assert_eq!(sel.site, SiteFilter::All);
        assert_eq!(sel.payload, PayloadRange::new(3000.0, 9000.0));
    }

    #[test]
    fn test_initial_selection_rounds_and_clamps() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 362.5, "FT", 1),
            record("A", 15_600.0, "B5", 1),
        ]);
        let sel = Selection::initial(&ds);
        assert_eq!(sel.payload, PayloadRange::new(362.0, 10_000.0));
    }

    #[test]
    fn test_proportion_binding_titles_follow_site() {
        let ds = two_site_dataset();
        let all = proportion_chart(&ds, &SiteFilter::All);
        assert_eq!(all.title, "Total Successful Launches by Site");
        assert_eq!((all.get("A"), all.get("B")), (Some(1), Some(1)));

        let site_a = proportion_chart(&ds, &SiteFilter::from_value("A"));
        assert_eq!(site_a.title, "Success vs Failure Launches for site A");
        assert_eq!((site_a.get("0"), site_a.get("1")), (Some(1), Some(1)));
    }

    #[test]
    fn test_correlation_binding_scenario() {
        let ds = two_site_dataset();
        let sel = Selection {
            site: SiteFilter::All,
            payload: PayloadRange::new(4000.0, 10_000.0),
        };
        let chart = correlation_chart(&ds, &sel);
        assert_eq!(chart.title, "Correlation between Payload and Success for All Sites");

        let xy: Vec<(f64, Outcome)> = chart.points.iter().map(|p| (p.payload_kg, p.class)).collect();
        assert_eq!(xy, [(5000.0, Outcome::Failure), (9000.0, Outcome::Success)]);
    }

    #[test]
    fn test_correlation_count_matches_filters() {
        let ds = two_site_dataset();
        for site in ["ALL", "A", "B", "Z"] {
            for (low, high) in [(0.0, 10_000.0), (3000.0, 3000.0), (4000.0, 9000.0), (6000.0, 2000.0)] {
                let sel = Selection {
                    site: SiteFilter::from_value(site),
                    payload: PayloadRange::new(low, high),
                };
                let expected =
                    filter_by_site(&filter_by_payload(&ds, sel.payload), &sel.site).len();
                assert_eq!(correlation_chart(&ds, &sel).points.len(), expected);
            }
        }
    }

    #[test]
    fn test_bindings_are_pure() {
        let ds = two_site_dataset();
        let sel = Selection {
            site: SiteFilter::from_value("A"),
            payload: PayloadRange::new(0.0, 10_000.0),
        };
        assert_eq!(correlation_chart(&ds, &sel), correlation_chart(&ds, &sel));
        assert_eq!(proportion_chart(&ds, &sel.site), proportion_chart(&ds, &sel.site));
    }

    #[test]
    fn test_unknown_site_renders_empty() {
        let ds = two_site_dataset();
        let sel = Selection {
            site: SiteFilter::from_value("Boca Chica"),
            payload: PayloadRange::new(0.0, 10_000.0),
        };
        assert!(proportion_chart(&ds, &sel.site).is_empty());
        assert!(correlation_chart(&ds, &sel).points.is_empty());
    }
}
