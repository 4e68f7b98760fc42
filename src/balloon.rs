use macroquad::prelude::*;
use ::rand::Rng;

use crate::config;
use crate::viewport::Viewport;

/// Build a color from a 0xRRGGBB value and an alpha on the 0..=255 scale.
pub fn color_from_hex(hex: u32, alpha: f32) -> Color {
    Color::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        alpha / 255.0,
    )
}

#[derive(Clone, Debug)]
pub struct Balloon {
    pub pos: Vec2,
    pub diameter: f32,
    pub speed: f32,
    pub color: Color,
    pub exploded: bool,
}

impl Balloon {
    /// Random balloon somewhere in the band just below the viewport.
    pub fn spawn(viewport: Viewport, rng: &mut impl Rng) -> Self {
        let hex = config::PALETTE[rng.gen_range(0..config::PALETTE.len())];
        let diameter = rng.gen_range(config::BALLOON_DIAMETER_MIN..=config::BALLOON_DIAMETER_MAX);
        let alpha = rng.gen_range(config::BALLOON_ALPHA_MIN..=config::BALLOON_ALPHA_MAX);
        let pos = vec2(
            rng.gen_range(0.0..viewport.width),
            rng.gen_range(viewport.height..viewport.height * 2.0),
        );
        let speed = rng.gen_range(config::BALLOON_SPEED_MIN..=config::BALLOON_SPEED_MAX);

        Self {
            pos,
            diameter,
            speed,
            color: color_from_hex(hex, alpha),
            exploded: false,
        }
    }

    pub fn radius(&self) -> f32 {
        self.diameter * 0.5
    }

    /// Fully above the top edge.
    pub fn is_off_screen(&self) -> bool {
        self.pos.y + self.radius() < 0.0
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.radius()
    }

    /// Top-left corner and side length of the highlight square.
    pub fn highlight_rect(&self) -> Rect {
        let size = self.diameter * config::HIGHLIGHT_SIZE;
        let offset = self.radius() * config::HIGHLIGHT_OFFSET;
        let angle = std::f32::consts::FRAC_PI_4;
        // Screen y grows downward, so the square sits up and to the right.
        let center = vec2(
            self.pos.x + offset * angle.cos(),
            self.pos.y - offset * angle.sin(),
        );
        Rect::new(center.x - size * 0.5, center.y - size * 0.5, size, size)
    }

    pub fn draw(&self) {
        if self.exploded {
            return;
        }
        draw_circle(self.pos.x, self.pos.y, self.radius(), self.color);

        let r = self.highlight_rect();
        draw_rectangle(
            r.x,
            r.y,
            r.w,
            r.h,
            Color::new(1.0, 1.0, 1.0, config::HIGHLIGHT_ALPHA / 255.0),
        );
    }
}

/// Fixed number of balloon slots. Slots are recycled in place, never removed.
pub struct BalloonPool {
    pub balloons: Vec<Balloon>,
}

impl BalloonPool {
    pub fn new(count: usize, viewport: Viewport, rng: &mut impl Rng) -> Self {
        let mut balloons = Vec::with_capacity(count);
        for _ in 0..count {
            balloons.push(Balloon::spawn(viewport, rng));
        }
        Self { balloons }
    }

    /// Move every live balloon up and recycle the ones that left the top or popped.
    /// Returns how many slots were recycled.
    pub fn update(&mut self, viewport: Viewport, rng: &mut impl Rng) -> usize {
        let mut recycled = 0;
        for slot in self.balloons.iter_mut() {
            if !slot.exploded {
                slot.pos.y -= slot.speed;
            }

            if slot.is_off_screen() || slot.exploded {
                let lane = slot.pos.x;
                let mut fresh = Balloon::spawn(viewport, rng);
                fresh.pos = vec2(lane, viewport.height + fresh.radius());
                *slot = fresh;
                recycled += 1;
            }
        }
        recycled
    }

    /// Index of the top-most live balloon under `point`. Later slots are drawn
    /// last, so they win ties.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        self.balloons
            .iter()
            .enumerate()
            .rev()
            .find(|(_, b)| !b.exploded && b.contains(point))
            .map(|(idx, _)| idx)
    }

    pub fn draw(&self) {
        for b in &self.balloons {
            b.draw();
        }
    }

    pub fn len(&self) -> usize {
        self.balloons.len()
    }

    pub fn live_count(&self) -> usize {
        self.balloons.iter().filter(|b| !b.exploded).count()
    }
}
