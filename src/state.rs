use crate::bindings::{correlation_chart, proportion_chart, Selection};
use crate::color::CategoryColors;
use crate::data::aggregate::{CorrelationChart, ProportionChart};
use crate::data::filter::{PayloadRange, SiteFilter};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Chart data is cached and only recomputed by the binding whose inputs
/// changed: a site change re-runs both charts, a payload change only the
/// correlation chart.
pub struct AppState {
    /// Loaded dataset. Replaced wholesale on a successful reload.
    pub dataset: LaunchDataset,

    /// Current control values.
    pub selection: Selection,

    /// Output of the proportion binding for `selection.site`.
    pub proportion: ProportionChart,

    /// Output of the correlation binding for `selection`.
    pub correlation: CorrelationChart,

    /// Colours for the scatter (booster categories) and the pie (sites).
    pub booster_colors: CategoryColors,
    pub site_colors: CategoryColors,

    /// Text typed into the site selector's search box.
    pub site_query: String,

    /// Whether the launch table is shown under the charts.
    pub show_table: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state for a freshly loaded dataset and run both bindings
    /// once with the default selection.
    pub fn new(dataset: LaunchDataset) -> Self {
        let selection = Selection::initial(&dataset);
        let proportion = proportion_chart(&dataset, &selection.site);
        let correlation = correlation_chart(&dataset, &selection);

        Self {
            booster_colors: CategoryColors::new(dataset.booster_categories()),
            site_colors: CategoryColors::new(dataset.all_sites()),
            dataset,
            selection,
            proportion,
            correlation,
            site_query: String::new(),
            show_table: false,
            status_message: None,
        }
    }

    /// Swap in a newly loaded dataset, resetting the selection.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        let show_table = self.show_table;
        *self = AppState::new(dataset);
        self.show_table = show_table;
    }

    /// Site selector changed. Re-runs both bindings.
    pub fn set_site(&mut self, site: SiteFilter) {
        if site == self.selection.site {
            return;
        }
        log::debug!("site selection → {}", site.value());
        self.selection.site = site;
        self.proportion = proportion_chart(&self.dataset, &self.selection.site);
        self.correlation = correlation_chart(&self.dataset, &self.selection);
    }

    /// Payload selector changed. Re-runs the correlation binding only.
    pub fn set_payload(&mut self, payload: PayloadRange) {
        if payload == self.selection.payload {
            return;
        }
        log::debug!("payload range → [{}, {}]", payload.low, payload.high);
        self.selection.payload = payload;
        self.correlation = correlation_chart(&self.dataset, &self.selection);
    }
}
