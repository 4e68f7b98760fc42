use macroquad::prelude::*;
use ::rand::Rng;

use crate::config;

/// One fragment of a burst. Life counts down from 255 and doubles as alpha.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub radius: f32,
    pub life: i32,
    pub color: Color,
}

impl Particle {
    pub fn new(pos: Vec2, color: Color, rng: &mut impl Rng) -> Self {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(config::PARTICLE_SPEED_MIN..=config::PARTICLE_SPEED_MAX);
        Self {
            pos,
            velocity: Vec2::from_angle(angle) * speed,
            acceleration: Vec2::ZERO,
            radius: rng.gen_range(config::PARTICLE_RADIUS_MIN..=config::PARTICLE_RADIUS_MAX),
            life: config::PARTICLE_LIFE,
            color,
        }
    }

    pub fn update(&mut self) {
        self.velocity += self.acceleration;
        self.pos += self.velocity;
        self.acceleration = Vec2::ZERO;
        self.life -= config::PARTICLE_FADE_STEP;
    }

    pub fn is_finished(&self) -> bool {
        self.life < 0
    }

    /// Fill color with alpha taken from remaining life, clamped to a valid range.
    pub fn fill_color(&self) -> Color {
        let alpha = self.life.clamp(0, 255) as f32 / 255.0;
        Color::new(self.color.r, self.color.g, self.color.b, alpha)
    }

    pub fn draw(&self) {
        draw_circle(self.pos.x, self.pos.y, self.radius, self.fill_color());
    }
}

/// A group of particles spawned together where a balloon popped.
#[derive(Clone, Debug)]
pub struct Explosion {
    particles: Vec<Particle>,
}

impl Explosion {
    pub fn new(origin: Vec2, color: Color, rng: &mut impl Rng) -> Self {
        let count = rng.gen_range(config::PARTICLES_MIN..=config::PARTICLES_MAX);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::new(origin, color, rng));
        }
        Self { particles }
    }

    /// Advance every particle one step and drop the expired ones.
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.update();
        }
        self.particles.retain(|p| !p.is_finished());
    }

    pub fn draw(&self) {
        for p in &self.particles {
            p.draw();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn count(&self) -> usize {
        self.particles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const BASE: Color = Color::new(0.1, 0.2, 0.3, 0.5);

    fn burst(seed: u64) -> Explosion {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Explosion::new(vec2(50.0, 60.0), BASE, &mut rng)
    }

    #[test]
    fn burst_size_and_particle_ranges() {
        for seed in 0..50 {
            let explosion = burst(seed);
            let n = explosion.count();
            assert!((config::PARTICLES_MIN..=config::PARTICLES_MAX).contains(&n));

            for p in &explosion.particles {
                let speed = p.velocity.length();
                assert!(speed >= config::PARTICLE_SPEED_MIN - 1e-4);
                assert!(speed <= config::PARTICLE_SPEED_MAX + 1e-4);
                assert!(p.radius >= config::PARTICLE_RADIUS_MIN);
                assert!(p.radius <= config::PARTICLE_RADIUS_MAX);
                assert_eq!(p.life, config::PARTICLE_LIFE);
                assert_eq!(p.pos, vec2(50.0, 60.0));
            }
        }
    }

    #[test]
    fn update_moves_by_velocity_and_resets_acceleration() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut p = Particle::new(Vec2::ZERO, WHITE, &mut rng);
        p.velocity = vec2(2.0, -1.0);
        p.acceleration = vec2(0.5, 0.5);

        p.update();

        assert!((p.velocity - vec2(2.5, -0.5)).length() < 1e-6);
        assert!((p.pos - vec2(2.5, -0.5)).length() < 1e-6);
        assert_eq!(p.acceleration, Vec2::ZERO);
        assert_eq!(p.life, config::PARTICLE_LIFE - config::PARTICLE_FADE_STEP);
    }

    #[test]
    fn alpha_is_clamped_once_life_goes_negative() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut p = Particle::new(Vec2::ZERO, RED, &mut rng);
        p.life = -3;
        assert_eq!(p.fill_color().a, 0.0);
        assert!(p.is_finished());

        p.life = 255;
        assert_eq!(p.fill_color().a, 1.0);
        assert_eq!(p.fill_color().r, RED.r);
    }

    #[test]
    fn explosion_finishes_after_all_particles_expire() {
        let mut explosion = burst(9);
        // 255 / 6 = 42.5, so the 43rd update pushes life below zero.
        for _ in 0..42 {
            explosion.update();
            assert!(!explosion.is_finished());
        }
        explosion.update();
        assert!(explosion.is_finished());
        assert_eq!(explosion.count(), 0);
    }

    #[test]
    fn particles_keep_base_color_rgb() {
        let explosion = burst(4);
        for p in &explosion.particles {
            assert_eq!(p.color.r, BASE.r);
            assert_eq!(p.color.g, BASE.g);
            assert_eq!(p.color.b, BASE.b);
        }
    }
}
