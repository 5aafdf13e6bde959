// src/gui/components/bar_chart.rs
//
// Horizontal bar chart for one clock column: one bar per GPU, labelled by
// product name, top-down in dataset order. Hovering a bar shows its tooltip.
// Returns the hovered row, if any.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{
    config::consts::{GPU_BAR_RGB, MEMORY_BAR_RGB},
    data::{fmt_clock, ClockColumn, Dataset},
    present::{labels, tooltip},
};

const ROW_H: f32 = 18.0;
const BAR_H: f32 = 13.0;
const LABEL_W: f32 = 170.0;
const GAP: f32 = 6.0;
const VALUE_W: f32 = 44.0;
const TICKS: usize = 4;

pub fn color(col: ClockColumn) -> Color32 {
    let [r, g, b] = match col {
        ClockColumn::Gpu => GPU_BAR_RGB,
        ClockColumn::Memory => MEMORY_BAR_RGB,
    };
    Color32::from_rgb(r, g, b)
}

pub fn draw(
    ui: &mut egui::Ui,
    ds: &Dataset,
    col: ClockColumn,
    highlight: Option<usize>,
) -> Option<usize> {
    let l = labels(col);
    let fill = color(col);
    let max = ds.max(col).max(1.0);
    let text_color = ui.visuals().text_color();
    let weak = ui.visuals().weak_text_color();

    ui.vertical_centered(|ui| ui.heading(l.title));

    legend(ui, fill, l.axis);
    axis_ticks(ui, max, weak);

    let mut hovered = None;
    let avail_h = (ui.available_height() - 2.0 * ROW_H).max(ROW_H);

    egui::ScrollArea::vertical()
        .id_salt(("bar_chart", l.title))
        .max_height(avail_h)
        .auto_shrink([false, false])
        .show_rows(ui, ROW_H, ds.len(), |ui, range| {
            for i in range {
                let (row_rect, _) =
                    ui.allocate_exact_size(Vec2::new(ui.available_width(), ROW_H), Sense::hover());
                let value = col.value(&ds.rows[i]);

                let label_rect = Rect::from_min_size(row_rect.min, Vec2::new(LABEL_W, ROW_H));
                let track = bar_track(row_rect);
                let bar_w = (track.width() * (value / max) as f32).max(1.0);
                let bar = Rect::from_min_size(
                    Pos2::new(track.left(), row_rect.center().y - BAR_H / 2.0),
                    Vec2::new(bar_w, BAR_H),
                );

                let resp = ui
                    .interact(bar, ui.id().with(("bar", i)), Sense::hover())
                    .on_hover_text(tooltip(ds, i, col));
                if resp.hovered() {
                    hovered = Some(i);
                }
                let lit = resp.hovered() || highlight == Some(i);

                let painter = ui.painter();
                painter.with_clip_rect(label_rect).text(
                    Pos2::new(label_rect.right() - GAP, label_rect.center().y),
                    Align2::RIGHT_CENTER,
                    ds.product_name(i),
                    FontId::proportional(12.0),
                    text_color,
                );
                painter.rect_filled(bar, 0.0, if lit { fill.gamma_multiply(0.6) } else { fill });
                painter.text(
                    Pos2::new(bar.right() + 3.0, bar.center().y),
                    Align2::LEFT_CENTER,
                    fmt_clock(value),
                    FontId::proportional(10.0),
                    weak,
                );
            }
        });

    ui.horizontal(|ui| {
        ui.add_space(LABEL_W);
        ui.label(egui::RichText::new(l.axis).strong());
    });

    hovered
}

/// Space left of the bars is the label column, right of them the value text.
fn bar_track(row: Rect) -> Rect {
    Rect::from_min_max(
        Pos2::new(row.left() + LABEL_W + GAP, row.top()),
        Pos2::new((row.right() - VALUE_W).max(row.left() + LABEL_W + GAP + 1.0), row.bottom()),
    )
}

fn legend(ui: &mut egui::Ui, fill: Color32, text: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("GPU Model").weak());
        ui.add_space(LABEL_W - 80.0);
        let (swatch, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
        ui.painter().rect_filled(swatch, 2.0, fill);
        ui.label(text);
    });
}

/// Tick labels at even fractions of `max` along the top of the bars.
fn axis_ticks(ui: &mut egui::Ui, max: f64, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), ROW_H), Sense::hover());
    let track = bar_track(rect);
    let painter = ui.painter();
    painter.line_segment(
        [Pos2::new(track.left(), track.bottom()), Pos2::new(track.right(), track.bottom())],
        Stroke::new(1.0, color),
    );
    for t in 0..=TICKS {
        let frac = t as f32 / TICKS as f32;
        let x = track.left() + track.width() * frac;
        painter.text(
            Pos2::new(x, track.center().y),
            Align2::CENTER_CENTER,
            fmt_clock((max * frac as f64).round()),
            FontId::proportional(10.0),
            color,
        );
    }
}
