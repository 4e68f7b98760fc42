use macroquad::prelude::*;
use ::rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::audio::SoundCue;
use crate::balloon::BalloonPool;
use crate::config::{self, SceneConfig};
use crate::particles::Explosion;
use crate::stats::PopStats;
use crate::viewport::Viewport;

/// What a successful press did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopEvent {
    pub slot: usize,
    pub pos: Vec2,
    pub score: u32,
}

/// All mutable state of the running sketch. Nothing here touches the graphics
/// context, so it can be driven from tests.
pub struct SceneState {
    pub config: SceneConfig,
    pub viewport: Viewport,
    pub balloons: BalloonPool,
    pub explosions: Vec<Explosion>,
    pub score: u32,
    pub stats: PopStats,
    pub rng: ChaCha8Rng,
    pub tick_count: u64,
    accumulator: f32,
    pops_this_tick: u32,
}

impl SceneState {
    pub fn new(settings: SceneConfig, viewport: Viewport, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let balloons = BalloonPool::new(settings.balloon_count, viewport, &mut rng);
        Self {
            config: settings,
            viewport,
            balloons,
            explosions: Vec::new(),
            score: 0,
            stats: PopStats::new(config::STATS_CAPACITY, config::STATS_SAMPLE_TICKS),
            rng,
            tick_count: 0,
            accumulator: 0.0,
            pops_this_tick: 0,
        }
    }

    /// Fresh balloons, no explosions. The score is kept.
    pub fn initialize(&mut self) {
        self.balloons = BalloonPool::new(self.config.balloon_count, self.viewport, &mut self.rng);
        self.explosions.clear();
        self.accumulator = 0.0;
    }

    /// Feed frame time into the fixed-step accumulator. Returns how many steps ran.
    pub fn tick(&mut self, dt: f32) -> u32 {
        // A NaN frame time would poison the accumulator for good.
        let dt = if dt.is_finite() {
            dt.clamp(0.0, config::MAX_FRAME_TIME)
        } else {
            0.0
        };
        self.accumulator += dt;
        let mut steps = 0;
        while self.accumulator >= config::FIXED_DT {
            self.step();
            self.accumulator -= config::FIXED_DT;
            steps += 1;
        }
        steps
    }

    /// One simulation step: balloons, then explosions.
    pub fn step(&mut self) {
        self.balloons.update(self.viewport, &mut self.rng);

        for explosion in &mut self.explosions {
            explosion.update();
        }
        self.explosions.retain(|e| !e.is_finished());

        self.stats.record(self.pops_this_tick, self.particle_count());
        self.pops_this_tick = 0;
        self.tick_count += 1;
    }

    /// Pop at most one balloon under the pointer.
    pub fn handle_press(&mut self, pos: Vec2, sound: &impl SoundCue) -> Option<PopEvent> {
        let slot = self.balloons.hit_test(pos)?;
        let balloon = &mut self.balloons.balloons[slot];
        balloon.exploded = true;
        let (center, color) = (balloon.pos, balloon.color);

        self.score += 1;
        self.pops_this_tick += 1;
        sound.play();
        self.explosions.push(Explosion::new(center, color, &mut self.rng));

        Some(PopEvent {
            slot,
            pos: center,
            score: self.score,
        })
    }

    /// Adopt a new surface size and start over with fresh balloons.
    pub fn handle_resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.initialize();
        eprintln!(
            "[BALLOONS] Resized to {:.0}x{:.0}, respawned {} balloons (score {})",
            self.viewport.width,
            self.viewport.height,
            self.balloons.len(),
            self.score
        );
    }

    pub fn particle_count(&self) -> usize {
        self.explosions.iter().map(|e| e.count()).sum()
    }
}
