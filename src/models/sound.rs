//! Sound cue selection for applied turns.

use super::pieces::TurnEffect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Move,
    Capture,
}

impl SoundCue {
    /// A capture takes precedence over a plain move
    pub fn for_effect(effect: &TurnEffect) -> Option<Self> {
        if effect.captured {
            Some(SoundCue::Capture)
        } else if effect.moved {
            Some(SoundCue::Move)
        } else {
            None
        }
    }

    pub fn asset_path(self) -> &'static str {
        match self {
            SoundCue::Move => "assets/move.wav",
            SoundCue::Capture => "assets/capture.wav",
        }
    }
}
