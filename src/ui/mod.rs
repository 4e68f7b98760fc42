pub mod graphs;
pub mod inspector;

use crate::audio::PopSound;
use crate::scene::SceneState;

/// Tracks which UI panels are open.
pub struct UiState {
    pub show_debug: bool,
    pub show_graphs: bool,
}

impl UiState {
    pub fn new(show_debug: bool) -> Self {
        Self {
            show_debug,
            show_graphs: true,
        }
    }
}

/// Whether egui is using the pointer this frame, so presses should not reach the scene.
pub fn wants_pointer() -> bool {
    let mut wants = false;
    egui_macroquad::cfg(|ctx| {
        wants = ctx.wants_pointer_input();
    });
    wants
}

/// Draw all egui UI panels.
pub fn draw_ui(scene: &SceneState, sound: &PopSound, ui_state: &mut UiState) {
    if !ui_state.show_debug {
        return;
    }

    egui_macroquad::ui(|ctx| {
        inspector::draw_inspector(ctx, scene, sound, ui_state);

        if ui_state.show_graphs {
            graphs::draw_graphs(ctx, &scene.stats);
        }
    });

    egui_macroquad::draw();
}
