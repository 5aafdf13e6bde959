// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::consts::{GPU_CLOCK_COL, WINDOW_TITLE},
    data::{ClockColumn, Dataset},
    present::Presenter,
};

use super::components::{bar_chart, data_table};

/// Opens the chart window and blocks until it is closed.
pub struct ChartWindow {
    options: eframe::NativeOptions,
}

impl ChartWindow {
    pub fn new(options: eframe::NativeOptions) -> Self {
        Self { options }
    }
}

impl Presenter for ChartWindow {
    fn present(&mut self, dataset: Dataset) -> Result<(), Box<dyn Error>> {
        let options = std::mem::take(&mut self.options);
        logf!(rows = dataset.len(), "opening chart window");
        eframe::run_native(
            WINDOW_TITLE,
            options,
            Box::new(move |_cc| Ok(Box::new(ChartApp::new(dataset)))),
        )?;
        logf!("chart window closed");
        Ok(())
    }
}

pub struct ChartApp {
    // read-only after construction
    pub dataset: Dataset,

    // bottom table panel toggle
    pub show_table: bool,

    // row under the pointer in either chart, highlighted in both
    pub hovered_row: Option<usize>,
}

impl ChartApp {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset, show_table: false, hovered_row: None }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("summary").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} GPUs, sorted by {} (highest first)",
                    self.dataset.len(),
                    GPU_CLOCK_COL
                ));
                ui.separator();
                ui.checkbox(&mut self.show_table, "Show table");
            });
        });

        if self.show_table {
            egui::TopBottomPanel::bottom("data")
                .resizable(true)
                .default_height(220.0)
                .show(ctx, |ui| {
                    data_table::draw(ui, &self.dataset);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.dataset.is_empty() {
                ui.centered_and_justified(|ui| ui.label("No GPUs with both clock values."));
                return;
            }

            let mut hovered = None;
            ui.columns(2, |cols| {
                for (ui, col) in cols.iter_mut().zip(ClockColumn::ALL) {
                    if let Some(i) = bar_chart::draw(ui, &self.dataset, col, self.hovered_row) {
                        hovered = Some(i);
                    }
                }
            });
            self.hovered_row = hovered;
        });
    }
}
