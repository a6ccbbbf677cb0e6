/// Keyframe animation playback for imported models.
///
/// Only the clock is driven here; sampling the keyframes is done by the
/// renderer backend from the clip name and the mixer time.

/// A named animation clip
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    /// Length in seconds
    pub duration: f32,
}

impl AnimationClip {
    pub fn new(name: &str, duration: f32) -> Self {
        Self { name: name.to_string(), duration }
    }
}

/// Plays one clip at a time, looping
#[derive(Debug, Clone, Default)]
pub struct AnimationMixer {
    clip: Option<AnimationClip>,
    time: f32,
}

impl AnimationMixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start playing a clip from the beginning
    pub fn play(&mut self, clip: AnimationClip) {
        self.clip = Some(clip);
        self.time = 0.0;
    }

    pub fn stop(&mut self) {
        self.clip = None;
        self.time = 0.0;
    }

    pub fn clip(&self) -> Option<&AnimationClip> {
        self.clip.as_ref()
    }

    /// Playback position in seconds, within the clip duration
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance playback; negative deltas play backwards
    pub fn update(&mut self, delta: f32) {
        let Some(clip) = &self.clip else {
            return;
        };
        if clip.duration <= 0.0 || !delta.is_finite() {
            self.time = 0.0;
            return;
        }
        self.time = (self.time + delta).rem_euclid(clip.duration);
    }
}
