use egui;
use macroquad::prelude::get_fps;

use super::UiState;
use crate::audio::PopSound;
use crate::scene::SceneState;

/// Live counters for the running scene.
pub fn draw_inspector(
    ctx: &egui::Context,
    scene: &SceneState,
    sound: &PopSound,
    ui_state: &mut UiState,
) {
    egui::Window::new("Debug")
        .default_pos(egui::pos2(10.0, 60.0))
        .default_size(egui::vec2(220.0, 200.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("FPS: {}", get_fps()));
            ui.label(format!("Tick: {}", scene.tick_count));
            ui.label(format!(
                "Viewport: {:.0} x {:.0}",
                scene.viewport.width, scene.viewport.height
            ));

            ui.separator();
            ui.label(format!(
                "Balloons: {} / {}",
                scene.balloons.live_count(),
                scene.balloons.len()
            ));
            ui.label(format!("Explosions: {}", scene.explosions.len()));
            ui.label(format!("Particles: {}", scene.particle_count()));
            ui.label(format!("Score: {}", scene.score));

            ui.separator();
            if sound.is_loaded() {
                ui.label(format!("Sound: {}", scene.config.pop_sound));
            } else {
                ui.colored_label(egui::Color32::from_rgb(220, 160, 80), "Sound: unavailable");
            }

            ui.separator();
            ui.toggle_value(&mut ui_state.show_graphs, "Graphs");
            ui.label("F1 hides this panel, R respawns balloons.");
        });
}
