use macroquad::prelude::*;

mod audio;
mod balloon;
mod config;
mod particles;
mod renderer;
mod scene;
mod stats;
mod ui;
mod viewport;

use audio::PopSound;
use config::SceneConfig;
use renderer::TrailCanvas;
use scene::SceneState;
use ui::UiState;
use viewport::Viewport;

fn window_conf() -> Conf {
    Conf {
        window_title: "Balloon Pop".to_string(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

fn current_viewport() -> Viewport {
    Viewport::new(screen_width(), screen_height())
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = SceneConfig::load_or_default(config::CONFIG_FILE);
    let sound = PopSound::load(&config.pop_sound).await;
    let seed = config
        .seed
        .unwrap_or_else(|| (macroquad::miniquad::date::now() * 1000.0) as u64);
    eprintln!("[BALLOONS] Starting with {} balloons, seed {seed}", config.balloon_count);

    let mut ui_state = UiState::new(config.show_debug);
    let mut scene = SceneState::new(config, current_viewport(), seed);
    let mut canvas = TrailCanvas::new(scene.viewport);

    loop {
        let viewport = current_viewport();
        if viewport != scene.viewport {
            scene.handle_resize(viewport.width, viewport.height);
        }
        canvas.check_resize(scene.viewport);

        if is_key_pressed(KeyCode::F1) {
            ui_state.show_debug = !ui_state.show_debug;
        }
        if is_key_pressed(KeyCode::R) {
            scene.initialize();
        }

        // Presses land between ticks, never inside one.
        let pointer_free = !ui_state.show_debug || !ui::wants_pointer();
        if pointer_free && is_mouse_button_pressed(MouseButton::Left) {
            let pos = Vec2::from(mouse_position());
            if let Some(pop) = scene.handle_press(pos, &sound) {
                if ui_state.show_debug {
                    eprintln!(
                        "[BALLOONS] Popped slot {} at ({:.0}, {:.0}), score {}",
                        pop.slot, pop.pos.x, pop.pos.y, pop.score
                    );
                }
            }
        }

        scene.tick(get_frame_time());

        renderer::draw(&scene, &mut canvas);
        ui::draw_ui(&scene, &sound, &mut ui_state);

        next_frame().await;
    }
}
