//! Text rendering of evaluation results
//!
//! Each cell renders as `"<row>,<column>: <value>"` where the value is the
//! number in shortest decimal form or `REFERROR`. Lines are sorted row-major.

use std::collections::HashMap;

use sumgrid_core::{CellId, CellValue};

/// Render one result line
pub fn render_line(id: CellId, value: &CellValue) -> String {
    format!("{}: {}", id, value)
}

/// Render a full result map, sorted row-major
pub fn render_results(results: &HashMap<CellId, CellValue>) -> Vec<String> {
    let mut entries: Vec<(&CellId, &CellValue)> = results.iter().collect();
    entries.sort_unstable_by_key(|(id, _)| **id);
    entries
        .into_iter()
        .map(|(id, value)| render_line(*id, value))
        .collect()
}
