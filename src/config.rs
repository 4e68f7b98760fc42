// All tunable constants in one place.

use serde::Deserialize;

// Simulation
pub const FIXED_DT: f32 = 1.0 / 60.0;
pub const MAX_FRAME_TIME: f32 = 0.1;

// Balloons
pub const NUM_BALLOONS: usize = 50;
pub const BALLOON_DIAMETER_MIN: f32 = 50.0;
pub const BALLOON_DIAMETER_MAX: f32 = 200.0;
pub const BALLOON_ALPHA_MIN: f32 = 50.0;
pub const BALLOON_ALPHA_MAX: f32 = 200.0;
pub const BALLOON_SPEED_MIN: f32 = 0.5;
pub const BALLOON_SPEED_MAX: f32 = 3.0;

pub const PALETTE: [u32; 9] = [
    0x03045e, 0x023e8a, 0x0077b6, 0x0096c7, 0x00b4d8, 0x48cae4, 0x90e0ef, 0xade8f4, 0xcaf0f8,
];

// Inner highlight square
pub const HIGHLIGHT_OFFSET: f32 = 0.7; // fraction of radius
pub const HIGHLIGHT_SIZE: f32 = 1.0 / 6.0; // fraction of diameter
pub const HIGHLIGHT_ALPHA: f32 = 180.0;

// Explosions
pub const PARTICLES_MIN: usize = 15;
pub const PARTICLES_MAX: usize = 30;
pub const PARTICLE_SPEED_MIN: f32 = 1.0;
pub const PARTICLE_SPEED_MAX: f32 = 6.0;
pub const PARTICLE_RADIUS_MIN: f32 = 3.0;
pub const PARTICLE_RADIUS_MAX: f32 = 8.0;
pub const PARTICLE_LIFE: i32 = 255;
pub const PARTICLE_FADE_STEP: i32 = 6;

// Background
pub const BACKGROUND_HEX: u32 = 0x00b4d8;
pub const TRAIL_ALPHA: f32 = 50.0;

// HUD
pub const HUD_FONT_SIZE: u16 = 32;
pub const HUD_MARGIN: f32 = 10.0;
pub const HUD_LABEL_HEX: u32 = 0x7400b8;

// Stats
pub const STATS_SAMPLE_TICKS: u32 = 60;
pub const STATS_CAPACITY: usize = 120;

pub const CONFIG_FILE: &str = "balloon_pop.json";

/// Runtime-adjustable settings, read once at startup.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub balloon_count: usize,
    pub hud_label: String,
    pub pop_sound: String,
    pub seed: Option<u64>,
    pub show_debug: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            balloon_count: NUM_BALLOONS,
            hud_label: "414730480".to_string(),
            pop_sound: "pop_sound.wav".to_string(),
            seed: None,
            show_debug: false,
        }
    }
}

impl SceneConfig {
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Parse error: {e}"))
    }

    /// Read the config file if it exists. `Ok(None)` means there was nothing to read.
    pub fn load_from_file(path: &str) -> Result<Option<Self>, String> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(format!("Read error for {path}: {e}")),
        };
        Self::from_json(&text).map(Some)
    }

    /// Config file contents, or defaults. Never fails.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(Some(config)) => {
                eprintln!("[BALLOONS] Loaded settings from {path}");
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                eprintln!("[BALLOONS] Config load failed, using defaults: {e}");
                Self::default()
            }
        }
    }
}
