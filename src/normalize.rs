// src/normalize.rs
//
// RawTable → Dataset: coerce the two clock columns, drop rows missing
// either clock, sort by GPU clock (descending, stable).

use crate::config::consts::{CLOCK_UNIT, GPU_CLOCK_COL, MEMORY_CLOCK_COL};
use crate::core::sanitize::{parse_number, strip_unit};
use crate::data::{Dataset, RawTable, Record};
use crate::error::{PipelineError, Result};
use crate::progress::Progress;

/// "1800 MHz" → Some(1800.0); "N/A" / "" → None.
pub fn parse_clock(raw: &str) -> Option<f64> {
    parse_number(&strip_unit(raw, CLOCK_UNIT))
}

/// Only a missing clock column is an error; bad values just lose their row.
pub fn normalize(table: RawTable, progress: &mut dyn Progress) -> Result<Dataset> {
    let gpu_ix = table
        .column(GPU_CLOCK_COL)
        .ok_or_else(|| PipelineError::SchemaMismatch(s!(GPU_CLOCK_COL)))?;
    let mem_ix = table
        .column(MEMORY_CLOCK_COL)
        .ok_or_else(|| PipelineError::SchemaMismatch(s!(MEMORY_CLOCK_COL)))?;

    let RawTable { headers, rows } = table;
    let total = rows.len();

    let mut records: Vec<Record> = rows
        .into_iter()
        .filter_map(|cells| {
            let gpu = coerce(&cells, gpu_ix, GPU_CLOCK_COL, progress);
            let mem = coerce(&cells, mem_ix, MEMORY_CLOCK_COL, progress);
            match (gpu, mem) {
                (Some(gpu_clock), Some(memory_clock)) => Some(Record { cells, gpu_clock, memory_clock }),
                _ => None,
            }
        })
        .collect();

    // Vec::sort_by is stable: equal clocks keep document order.
    records.sort_by(|a, b| b.gpu_clock.total_cmp(&a.gpu_clock));

    logf!(kept = records.len(), dropped = total - records.len(), "normalized");
    Ok(Dataset { headers, rows: records })
}

fn coerce(cells: &[String], ix: usize, column: &str, progress: &mut dyn Progress) -> Option<f64> {
    let raw = cells.get(ix).map(|s| s.as_str()).unwrap_or("");
    let v = parse_clock(raw);
    if v.is_none() {
        logd!(column, raw, "clock value not numeric");
        progress.value_unparsed(column, raw);
    }
    v
}
