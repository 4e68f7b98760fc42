use macroquad::audio::{load_sound, play_sound_once, Sound};

/// Something that can be triggered when a balloon pops.
pub trait SoundCue {
    fn play(&self);
}

/// Pop sound effect. Missing or undecodable files leave it silent.
pub struct PopSound {
    sound: Option<Sound>,
}

impl PopSound {
    pub fn silent() -> Self {
        Self { sound: None }
    }

    pub async fn load(path: &str) -> Self {
        match load_sound(path).await {
            Ok(sound) => Self { sound: Some(sound) },
            Err(e) => {
                eprintln!("[BALLOONS] Pop sound unavailable ({path}): {e:?}");
                Self::silent()
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.sound.is_some()
    }
}

impl SoundCue for PopSound {
    fn play(&self) {
        if let Some(ref sound) = self.sound {
            play_sound_once(sound);
        }
    }
}
