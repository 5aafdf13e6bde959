// src/present.rs
//
// Presentation collaborators. A presenter gets the finished Dataset and
// owns it from there; the pipeline never calls back into it.

use std::error::Error;
use std::io::Write;

use crate::data::{fmt_clock, ClockColumn, Dataset};

pub trait Presenter {
    fn present(&mut self, dataset: Dataset) -> Result<(), Box<dyn Error>>;
}

/// Chart title, axis label, legend and tooltip wording for one clock column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartLabels {
    pub title: &'static str,
    pub axis: &'static str,
    pub tooltip_name: &'static str,
}

pub fn labels(col: ClockColumn) -> ChartLabels {
    match col {
        ClockColumn::Gpu => ChartLabels {
            title: "GPU Clock Speeds",
            axis: "GPU Clock (MHz)",
            tooltip_name: "GPU Clock",
        },
        ClockColumn::Memory => ChartLabels {
            title: "Memory Clock Speeds",
            axis: "Memory Clock (MHz)",
            tooltip_name: "Memory Clock",
        },
    }
}

/// Hover text for row `i` of the chart for `col`.
pub fn tooltip(ds: &Dataset, i: usize, col: ClockColumn) -> String {
    let value = ds.rows.get(i).map(|r| col.value(r)).unwrap_or_default();
    format!(
        "Model: {}\nReleased: {}\n{}: {} MHz",
        ds.product_name(i),
        ds.released(i),
        labels(col).tooltip_name,
        fmt_clock(value)
    )
}

/// Both charts as fixed-width text bars.
pub struct TextPresenter<W: Write> {
    out: W,
    /// Width of the longest bar in characters
    pub bar_width: usize,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, bar_width: 50 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn chart(&mut self, ds: &Dataset, col: ClockColumn) -> std::io::Result<()> {
        let l = labels(col);
        let max = ds.max(col);
        let name_w = (0..ds.len()).map(|i| ds.product_name(i).chars().count()).max().unwrap_or(0);

        writeln!(self.out, "{}", l.title)?;
        writeln!(self.out, "{}", "=".repeat(l.title.len()))?;
        for i in 0..ds.len() {
            let v = col.value(&ds.rows[i]);
            let len = if max > 0.0 { ((v / max) * self.bar_width as f64).round() as usize } else { 0 };
            writeln!(
                self.out,
                "{:<name_w$} | {} {}",
                ds.product_name(i),
                "#".repeat(len),
                fmt_clock(v)
            )?;
        }
        writeln!(self.out, "{:<name_w$}   {}", "", l.axis)?;
        Ok(())
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, dataset: Dataset) -> Result<(), Box<dyn Error>> {
        for (n, col) in ClockColumn::ALL.into_iter().enumerate() {
            if n > 0 {
                writeln!(self.out)?;
            }
            self.chart(&dataset, col)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
