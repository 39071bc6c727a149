use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::bindings::Selection;
use crate::data::aggregate::{CorrelationChart, ProportionChart};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart export (File → Export charts…)
// ---------------------------------------------------------------------------

/// Snapshot of what is currently on screen.
#[derive(Debug, Serialize)]
pub struct ChartExport<'a> {
    pub selection: &'a Selection,
    pub proportion: &'a ProportionChart,
    pub correlation: &'a CorrelationChart,
}

impl<'a> ChartExport<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        ChartExport {
            selection: &state.selection,
            proportion: &state.proportion,
            correlation: &state.correlation,
        }
    }
}

/// Write the current selection and both charts' data as pretty JSON.
pub fn export_charts(path: &Path, state: &AppState) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &ChartExport::from_state(state))
        .context("serialising chart data")?;
    writer.flush().context("flushing export file")?;

    log::info!("Exported chart data to {}", path.display());
    Ok(())
}
