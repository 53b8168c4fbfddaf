//! Audio cues
//!
//! The game never mixes audio itself. It names a cue and hands it, with a
//! volume, to whatever sink the host plugged in.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle
    PaddleHit,
    /// Ball bounces off the top or bottom wall
    WallHit,
    /// A point was scored
    Score,
    /// Match over
    GameOver,
}

/// Fire-and-forget playback provided by the host
pub trait AudioSink {
    /// Play `effect` at `volume` (0.0 - 1.0)
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Records cues in order, ignoring volume
impl AudioSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect, _volume: f32) {
        self.push(effect);
    }
}

/// Volume and mute control in front of an `AudioSink`
pub struct AudioManager<S> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct VolumeProbe(Vec<(SoundEffect, f32)>);

    impl AudioSink for VolumeProbe {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.push((effect, volume));
        }
    }

    #[test]
    fn test_effective_volume() {
        let mut audio = AudioManager::new(VolumeProbe(Vec::new()));
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(0.5);
        audio.play(SoundEffect::WallHit);
        assert_eq!(audio.sink().0, vec![(SoundEffect::WallHit, 0.25)]);
    }

    #[test]
    fn test_volume_clamped() {
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(-1.0);
        assert_eq!(audio.effective_volume(), 0.0);
        audio.set_sfx_volume(1.0);
        assert_eq!(audio.effective_volume(), 1.0);
    }

    #[test]
    fn test_muted_drops_cues() {
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());
        audio.set_muted(true);
        audio.play(SoundEffect::Score);
        assert!(audio.sink().is_empty());

        audio.set_muted(false);
        audio.play(SoundEffect::Score);
        assert_eq!(audio.sink(), &vec![SoundEffect::Score]);
    }
}
