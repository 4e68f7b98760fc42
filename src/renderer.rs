use macroquad::prelude::*;

use crate::balloon::color_from_hex;
use crate::config;
use crate::scene::SceneState;
use crate::viewport::Viewport;

/// Offscreen canvas that keeps previous frames, so a translucent overlay
/// leaves fading trails instead of a hard clear.
pub struct TrailCanvas {
    target: RenderTarget,
    width: u32,
    height: u32,
    needs_clear: bool,
}

impl TrailCanvas {
    pub fn new(viewport: Viewport) -> Self {
        let (width, height) = viewport.pixel_size();
        Self {
            target: Self::make_target(width, height),
            width,
            height,
            needs_clear: true,
        }
    }

    fn make_target(width: u32, height: u32) -> RenderTarget {
        let target = render_target(width.max(1), height.max(1));
        target.texture.set_filter(FilterMode::Linear);
        target
    }

    /// Rebuild the target if the viewport changed size. Returns true if it did.
    pub fn check_resize(&mut self, viewport: Viewport) -> bool {
        let (w, h) = viewport.pixel_size();
        if w == self.width && h == self.height {
            return false;
        }
        self.width = w;
        self.height = h;
        self.target = Self::make_target(w, h);
        self.needs_clear = true;
        true
    }

    /// Redirect drawing into the canvas and lay down this frame's overlay.
    fn begin(&mut self, viewport: Viewport) {
        set_camera(&Camera2D {
            render_target: Some(self.target.clone()),
            ..Camera2D::from_display_rect(Rect::new(0.0, 0.0, viewport.width, viewport.height))
        });

        if self.needs_clear {
            clear_background(color_from_hex(config::BACKGROUND_HEX, 255.0));
            self.needs_clear = false;
        }
        draw_rectangle(
            0.0,
            0.0,
            viewport.width,
            viewport.height,
            color_from_hex(config::BACKGROUND_HEX, config::TRAIL_ALPHA),
        );
    }

    /// Composite the canvas onto the screen.
    fn present(&self, viewport: Viewport) {
        set_default_camera();
        draw_texture_ex(
            &self.target.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(viewport.width, viewport.height)),
                ..Default::default()
            },
        );
    }
}

/// Draw one frame: trail overlay, balloons, explosions, then the HUD on top.
pub fn draw(scene: &SceneState, canvas: &mut TrailCanvas) {
    let vp = scene.viewport;

    canvas.begin(vp);
    scene.balloons.draw();
    for explosion in &scene.explosions {
        explosion.draw();
    }
    canvas.present(vp);

    draw_hud(&scene.config.hud_label, scene.score, vp);
}

fn draw_hud(label: &str, score: u32, vp: Viewport) {
    let size = config::HUD_FONT_SIZE;
    let margin = config::HUD_MARGIN;

    // draw_text anchors at the baseline; shift down by the ascent to pin the top edge.
    let label_dims = measure_text(label, None, size, 1.0);
    draw_text(
        label,
        margin,
        margin + label_dims.offset_y,
        size as f32,
        color_from_hex(config::HUD_LABEL_HEX, 255.0),
    );

    let score_text = format!("Score: {score}");
    let score_dims = measure_text(&score_text, None, size, 1.0);
    draw_text(
        &score_text,
        vp.width - margin - score_dims.width,
        margin + score_dims.offset_y,
        size as f32,
        WHITE,
    );
}
