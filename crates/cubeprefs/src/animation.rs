use cubepuzzle::Twist;
use serde::{Deserialize, Serialize};

/// How many animation-completion signals the sequencer waits for before
/// committing a move.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CompletionMode {
    /// One signal per cubicle in the twisted slices.
    #[default]
    PerTwist,
    /// The same number of signals for every move, for renderers that animate
    /// whole layers.
    Fixed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    pub completion_mode: CompletionMode,
    /// Signal count used in [`CompletionMode::Fixed`].
    pub fixed_completion_count: usize,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            completion_mode: CompletionMode::PerTwist,
            fixed_completion_count: 27,
        }
    }
}
impl AnimationPreferences {
    /// Returns the number of completion signals expected for a move with the
    /// given twist.
    pub fn expected_completions(&self, twist: &Twist) -> usize {
        match self.completion_mode {
            CompletionMode::PerTwist => twist.size(),
            CompletionMode::Fixed => self.fixed_completion_count,
        }
    }
}
