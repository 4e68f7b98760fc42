use egui;

use crate::stats::{PopStats, RingBuffer};

/// Draw pop-rate and particle-load graphs.
pub fn draw_graphs(ctx: &egui::Context, stats: &PopStats) {
    egui::Window::new("Statistics")
        .default_pos(egui::pos2(10.0, 320.0))
        .default_size(egui::vec2(300.0, 200.0))
        .resizable(true)
        .show(ctx, |ui| {
            ui.collapsing("Pops / second", |ui| {
                draw_line_graph(ui, &stats.pops, egui::Color32::from_rgb(255, 200, 90));
            });

            ui.collapsing("Live particles", |ui| {
                draw_line_graph(ui, &stats.particles, egui::Color32::from_rgb(120, 200, 255));
            });
        });
}

fn draw_line_graph(ui: &mut egui::Ui, buffer: &RingBuffer, color: egui::Color32) {
    let size = egui::vec2(ui.available_width(), 80.0);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, 2.0, egui::Color32::from_gray(20));

    let len = buffer.len();
    if len >= 2 {
        let range = buffer.max().max(1.0);
        let points: Vec<egui::Pos2> = buffer
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let x = rect.left() + (i as f32 / (len - 1) as f32) * rect.width();
                let y = rect.bottom() - (v / range) * rect.height();
                egui::pos2(x, y)
            })
            .collect();

        for pair in points.windows(2) {
            painter.line_segment([pair[0], pair[1]], egui::Stroke::new(1.5, color));
        }
    }

    if let Some(val) = buffer.last() {
        painter.text(
            egui::pos2(rect.right() - 4.0, rect.top() + 2.0),
            egui::Align2::RIGHT_TOP,
            format!("{val:.0}"),
            egui::FontId::proportional(10.0),
            egui::Color32::from_gray(200),
        );
    }
}
