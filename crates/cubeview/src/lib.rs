//! Move sequencing and free-drag orientation for a rendered cube.
//!
//! The renderer itself lives outside this crate. It feeds pointer deltas to
//! [`DragState`], reports finished animations to [`MoveSequencer`], and reads
//! back the current move and the global facelet permutation.

mod drag;
mod sequencer;

pub use drag::DragState;
pub use sequencer::{MoveSequencer, MoveState, SequencerEvent, Transition};
