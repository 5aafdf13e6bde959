// src/specs/gpu_table.rs
//
// The GPU list on techpowerup's /gpu-specs/ page:
//
//   <div id="list" class="table-wrapper">
//     <table class="processors">
//       <thead class="colheader"><tr><th>Product Name</th>…</tr></thead>
//       <tr><td><a>GeForce RTX 4090</a></td><td><a>AD102</a></td>…</tr>
//
// Data rows may sit directly under <table>; repeated header rows are
// interleaved and carry <th> cells.

use scraper::{ElementRef, Html};

use crate::config::consts::{DEFAULT_HEADERS, HEADER_SECTION_SELECTOR, TABLE_SELECTOR, WRAPPER_SELECTOR};
use crate::core::html::{self, selector};
use crate::data::{HeaderList, RawRow};
use crate::error::{PipelineError, Result};
use crate::progress::Progress;

/// The located `<table class="processors">`, borrowed from the parsed page.
#[derive(Clone, Copy, Debug)]
pub struct TableHandle<'a> {
    el: ElementRef<'a>,
}

/// Container first, then the table inside it.
pub fn locate_table(doc: &Html) -> Result<TableHandle<'_>> {
    let wrapper = doc
        .select(&selector(WRAPPER_SELECTOR))
        .next()
        .ok_or(PipelineError::StructureNotFound("table wrapper (div#list.table-wrapper)"))?;

    let table = html::first(wrapper, &selector(TABLE_SELECTOR))
        .ok_or(PipelineError::StructureNotFound("GPU table (table.processors)"))?;

    logd!("located GPU table");
    Ok(TableHandle { el: table })
}

/// Column names from `thead.colheader > tr`, trimmed, left to right.
/// A header row with no `<th>` falls back to `DEFAULT_HEADERS`.
pub fn extract_headers(table: TableHandle<'_>) -> Result<HeaderList> {
    let thead = html::first(table.el, &selector(HEADER_SECTION_SELECTOR))
        .ok_or(PipelineError::HeaderNotFound)?;
    let header_row = html::first(thead, &selector("tr")).ok_or(PipelineError::HeaderNotFound)?;

    let headers: HeaderList = header_row
        .select(&selector("th"))
        .map(html::text)
        .collect();

    if headers.is_empty() {
        logf!("header row has no cells, using default headers");
        return Ok(DEFAULT_HEADERS.iter().map(|h| s!(*h)).collect());
    }
    Ok(headers)
}

/// Data rows in document order. Rows holding any `<th>` are skipped;
/// rows whose `<td>` count differs from the header count are dropped and
/// reported through `progress`.
pub fn extract_rows(
    table: TableHandle<'_>,
    headers: &HeaderList,
    progress: &mut dyn Progress,
) -> Vec<RawRow> {
    let tr = selector("tr");
    let th = selector("th");
    let td = selector("td");
    let a = selector("a");
    let expected = headers.len();

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for (position, row) in table.el.select(&tr).enumerate() {
        if html::contains(row, &th) {
            continue;
        }

        let cells: RawRow = row.select(&td).map(|cell| cell_text(cell, &a)).collect();

        if cells.len() != expected {
            dropped += 1;
            logd!(position, cells = cells.len(), expected, "dropping row");
            progress.row_dropped(position, cells.len(), expected);
            continue;
        }
        rows.push(cells);
    }

    logd!(kept = rows.len(), dropped, "rows extracted");
    rows
}

/// A linked cell reads as its link text ("AD102", not "AD102 (some note)").
fn cell_text(cell: ElementRef<'_>, a: &scraper::Selector) -> String {
    match html::first(cell, a) {
        Some(link) => html::text(link),
        None => html::text(cell),
    }
}
