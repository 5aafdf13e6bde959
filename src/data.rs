// src/data.rs
//
// Table shapes handed between pipeline stages.
//
// - RawTable: headers + text rows exactly as extracted, shape-checked.
// - Dataset:  normalized rows with the two clock columns as numbers,
//             sorted by GPU clock. Read-only for presenters.

use std::fmt::Write as _;

use crate::config::consts::{GPU_CLOCK_COL, MEMORY_CLOCK_COL, PRODUCT_NAME_COL, RELEASED_COL};

pub type HeaderList = Vec<String>;
pub type RawRow = Vec<String>;

/// Extracted table before any coercion. Every row has `headers.len()` cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: HeaderList,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// Assemble from extracted parts, keeping only rows of the header's width.
    pub fn new(headers: HeaderList, rows: Vec<RawRow>) -> Self {
        let n = headers.len();
        let rows = rows.into_iter().filter(|r| r.len() == n).collect();
        Self { headers, rows }
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }
}

/// One GPU after normalization. Both clocks are always present.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// All text cells in header order (clock cells keep their original text)
    pub cells: Vec<String>,
    pub gpu_clock: f64,
    pub memory_clock: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockColumn {
    Gpu,
    Memory,
}

impl ClockColumn {
    pub const ALL: [ClockColumn; 2] = [ClockColumn::Gpu, ClockColumn::Memory];

    pub fn header(self) -> &'static str {
        match self {
            ClockColumn::Gpu => GPU_CLOCK_COL,
            ClockColumn::Memory => MEMORY_CLOCK_COL,
        }
    }

    pub fn value(self, rec: &Record) -> f64 {
        match self {
            ClockColumn::Gpu => rec.gpu_clock,
            ClockColumn::Memory => rec.memory_clock,
        }
    }
}

/// Normalized GPU table. Row position is the display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub headers: HeaderList,
    pub rows: Vec<Record>,
}

impl Dataset {
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Text cell of row `i` under header `name`.
    pub fn text(&self, i: usize, name: &str) -> Option<&str> {
        let ci = self.column(name)?;
        self.rows.get(i)?.cells.get(ci).map(|s| s.as_str())
    }

    pub fn product_name(&self, i: usize) -> &str {
        self.text(i, PRODUCT_NAME_COL).unwrap_or("")
    }

    pub fn released(&self, i: usize) -> &str {
        self.text(i, RELEASED_COL).unwrap_or("")
    }

    /// Largest value in a clock column, 0 when empty.
    pub fn max(&self, col: ClockColumn) -> f64 {
        self.rows.iter().map(|r| col.value(r)).fold(0.0, f64::max)
    }

    /// Cells as displayed: clock columns show the parsed number.
    pub fn display_row(&self, i: usize) -> Option<Vec<String>> {
        let rec = self.rows.get(i)?;
        let gpu_ix = self.column(GPU_CLOCK_COL);
        let mem_ix = self.column(MEMORY_CLOCK_COL);
        Some(
            rec.cells
                .iter()
                .enumerate()
                .map(|(ci, cell)| {
                    if Some(ci) == gpu_ix {
                        fmt_clock(rec.gpu_clock)
                    } else if Some(ci) == mem_ix {
                        fmt_clock(rec.memory_clock)
                    } else {
                        cell.clone()
                    }
                })
                .collect(),
        )
    }

    /// Aligned text table of the first `n` rows with a leading index column.
    pub fn preview(&self, n: usize) -> String {
        let shown: Vec<Vec<String>> = (0..self.len().min(n))
            .filter_map(|i| self.display_row(i))
            .collect();

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &shown {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        let ix_w = shown.len().saturating_sub(1).to_string().len();

        let mut out = s!();
        let _ = write!(out, "{:ix_w$}", "");
        for (h, w) in self.headers.iter().zip(widths.iter().copied()) {
            let _ = write!(out, "  {h:>w$}");
        }
        out.push('\n');
        for (i, row) in shown.iter().enumerate() {
            let _ = write!(out, "{i:<ix_w$}");
            for (cell, w) in row.iter().zip(widths.iter().copied()) {
                let _ = write!(out, "  {cell:>w$}");
            }
            out.push('\n');
        }
        let _ = write!(out, "[{} rows x {} columns]", self.len(), self.headers.len());
        out
    }
}

/// Whole numbers print without a fraction ("2235"), others keep theirs.
pub fn fmt_clock(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds() -> Dataset {
        Dataset {
            headers: vec![
                s!("Product Name"), s!("Released"), s!("GPU clock"), s!("Memory clock"),
            ],
            rows: vec![
                Record {
                    cells: vec![s!("RTX 4090"), s!("2022"), s!("2235 MHz"), s!("1313 MHz")],
                    gpu_clock: 2235.0,
                    memory_clock: 1313.0,
                },
                Record {
                    cells: vec![s!("RX 7600"), s!("2023"), s!("1720.5 MHz"), s!("2250 MHz")],
                    gpu_clock: 1720.5,
                    memory_clock: 2250.0,
                },
            ],
        }
    }

    #[test]
    fn raw_table_new_drops_ragged_rows() {
        let t = RawTable::new(
            vec![s!("A"), s!("B")],
            vec![vec![s!("1"), s!("2")], vec![s!("3")], vec![s!("4"), s!("5"), s!("6")]],
        );
        assert_eq!(t.rows, vec![vec![s!("1"), s!("2")]]);
        assert_eq!(t.column("B"), Some(1));
        assert_eq!(t.column("C"), None);
    }

    #[test]
    fn text_lookups_by_header() {
        let d = ds();
        assert_eq!(d.product_name(1), "RX 7600");
        assert_eq!(d.released(0), "2022");
        assert_eq!(d.text(5, "Released"), None);
        assert_eq!(d.text(0, "Bus"), None);
    }

    #[test]
    fn max_per_clock_column() {
        let d = ds();
        assert_eq!(d.max(ClockColumn::Gpu), 2235.0);
        assert_eq!(d.max(ClockColumn::Memory), 2250.0);
        assert_eq!(Dataset::default().max(ClockColumn::Gpu), 0.0);
    }

    #[test]
    fn display_row_shows_numbers_for_clocks() {
        let d = ds();
        assert_eq!(
            d.display_row(1).unwrap(),
            vec![s!("RX 7600"), s!("2023"), s!("1720.5"), s!("2250")]
        );
        assert!(d.display_row(2).is_none());
    }

    #[test]
    fn preview_limits_rows_and_reports_shape() {
        let p = ds().preview(1);
        let lines: Vec<&str> = p.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Product Name"));
        assert!(lines[1].starts_with('0'));
        assert!(lines[1].contains("RTX 4090"));
        assert!(lines[1].contains("2235"));
        assert!(!p.contains("RX 7600"));
        assert_eq!(lines[2], "[2 rows x 4 columns]");
    }

    #[test]
    fn fmt_clock_variants() {
        assert_eq!(fmt_clock(1800.0), "1800");
        assert_eq!(fmt_clock(1800.5), "1800.5");
    }
}
