// src/gui/components/data_table.rs
//
// Read-only table of the normalized dataset, in chart order.
// Clock columns show the parsed numbers, right-aligned.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::{GPU_CLOCK_COL, MEMORY_CLOCK_COL};
use crate::data::{ClockColumn, Dataset};

/// First column wide for product names, the rest narrow.
pub fn initial_widths(headers: &[String]) -> Vec<f32> {
    headers
        .iter()
        .enumerate()
        .map(|(ci, h)| match (ci, h.as_str()) {
            (0, _) => 180.0,
            (_, GPU_CLOCK_COL | MEMORY_CLOCK_COL) => 90.0,
            _ => 120.0,
        })
        .collect()
}

pub fn draw(ui: &mut egui::Ui, ds: &Dataset) {
    let numeric: Vec<bool> = ds
        .headers
        .iter()
        .map(|h| ClockColumn::ALL.iter().any(|c| c.header() == h))
        .collect();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::auto().at_least(28.0));
    for w in initial_widths(&ds.headers) {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(22.0, |mut header| {
            header.col(|ui| { ui.label(RichText::new("#").strong()); });
            for h in &ds.headers {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(18.0, ds.len(), |mut row| {
                let i = row.index();
                let Some(cells) = ds.display_row(i) else { return };
                row.col(|ui| { ui.label(i.to_string()); });
                for (ci, cell) in cells.iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if numeric.get(ci).copied().unwrap_or(false) {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(cell); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                        }
                    });
                }
            });
        });
}
