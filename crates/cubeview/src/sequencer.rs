//! Sequential move pipeline.
//!
//! Moves are animated one at a time in submission order. The renderer
//! reports each finished element of the current animation, and once the
//! expected number of reports arrives the move's permutation is committed to
//! the global cube state and the next move starts.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::sync::mpsc;

use cubemath::Permutation;
use cubeprefs::AnimationPreferences;
use cubepuzzle::{Cubicle, FACELET_COUNT, Move, MoveId};

/// Lifecycle state of a move submitted to a [`MoveSequencer`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveState {
    /// Waiting in the queue.
    Pending,
    /// Currently animating. At most one move is in this state.
    Animating,
    /// Applied to the global permutation.
    Committed,
}

/// State change reported by a [`MoveSequencer`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The move began animating.
    Started(MoveId),
    /// The move's permutation was applied to the global permutation.
    Committed(MoveId),
}

/// Input to a [`MoveSequencer`] delivered over a channel.
#[derive(Debug, Clone)]
pub enum SequencerEvent {
    /// Submit a move. Equivalent to [`MoveSequencer::enqueue()`].
    Enqueue(Move),
    /// One element of an animation finished. Equivalent to
    /// [`MoveSequencer::on_animation_complete()`].
    AnimationComplete {
        /// Move that the element was animating.
        move_id: MoveId,
        /// Cubicle or facelet index of the element, used only for logging.
        element: usize,
    },
}

#[derive(Debug, Clone)]
struct InFlightMove {
    mv: Move,
    received: usize,
    expected: usize,
}

/// State machine that applies moves one at a time.
///
/// The global permutation changes only when a move commits, so it never
/// reflects a partially animated move.
#[derive(Clone)]
pub struct MoveSequencer {
    prefs: AnimationPreferences,
    /// Moves waiting to be animated.
    queue: VecDeque<Move>,
    /// Move currently animating.
    current: Option<InFlightMove>,
    /// Composition of every committed move.
    global: Permutation,
    /// IDs of committed moves, oldest first.
    history: Vec<MoveId>,
    /// IDs in `history`, for lookup.
    committed: HashSet<MoveId>,
}

impl fmt::Debug for MoveSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveSequencer")
            .field("current", &self.current.as_ref().map(|c| c.mv.to_string()))
            .field("queue_len", &self.queue.len())
            .field("history_len", &self.history.len())
            .finish_non_exhaustive()
    }
}

impl Default for MoveSequencer {
    fn default() -> Self {
        Self::new(AnimationPreferences::default())
    }
}

impl MoveSequencer {
    /// Constructs an idle sequencer with the cube in the solved state.
    pub fn new(prefs: AnimationPreferences) -> Self {
        Self {
            prefs,
            queue: VecDeque::new(),
            current: None,
            global: Permutation::identity(FACELET_COUNT),
            history: vec![],
            committed: HashSet::new(),
        }
    }

    /// Returns the animation preferences.
    pub fn prefs(&self) -> &AnimationPreferences {
        &self.prefs
    }
    /// Replaces the animation preferences. The move currently animating
    /// keeps the signal count it started with.
    pub fn set_prefs(&mut self, prefs: AnimationPreferences) {
        self.prefs = prefs;
    }

    /// Submits a move. If nothing is animating, it starts immediately.
    pub fn enqueue(&mut self, mv: Move) -> Vec<Transition> {
        log::trace!("enqueueing move {mv} ({})", mv.id());
        self.queue.push_back(mv);
        let mut transitions = vec![];
        self.advance(&mut transitions);
        transitions
    }

    /// Records that one element of an animation finished.
    ///
    /// Signals for any move other than the one currently animating are
    /// ignored. When the current move has received all its signals, it is
    /// committed and the next move starts.
    pub fn on_animation_complete(&mut self, move_id: MoveId, element: usize) -> Vec<Transition> {
        let mut transitions = vec![];

        let Some(current) = self.current.as_mut().filter(|c| c.mv.id() == move_id) else {
            log::debug!("ignoring stale completion signal for move {move_id} (element {element})");
            return transitions;
        };

        current.received += 1;
        log::trace!(
            "move {move_id}: element {element} finished ({}/{})",
            current.received,
            current.expected,
        );
        if current.received >= current.expected {
            self.commit(&mut transitions);
            self.advance(&mut transitions);
        }
        transitions
    }

    /// Handles one event.
    pub fn handle(&mut self, event: SequencerEvent) -> Vec<Transition> {
        match event {
            SequencerEvent::Enqueue(mv) => self.enqueue(mv),
            SequencerEvent::AnimationComplete { move_id, element } => {
                self.on_animation_complete(move_id, element)
            }
        }
    }

    /// Handles every event currently waiting in `rx`, in arrival order,
    /// without blocking.
    pub fn drain(&mut self, rx: &mpsc::Receiver<SequencerEvent>) -> Vec<Transition> {
        rx.try_iter().flat_map(|event| self.handle(event)).collect()
    }

    /// Returns the move currently animating.
    pub fn current_move(&self) -> Option<&Move> {
        Some(&self.current.as_ref()?.mv)
    }
    /// Returns the number of signals received and expected for the move
    /// currently animating.
    pub fn progress(&self) -> Option<(usize, usize)> {
        let current = self.current.as_ref()?;
        Some((current.received, current.expected))
    }
    /// Returns whether no move is animating. The queue is always empty when
    /// this is true.
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the number of positive quarter turns that `cubicle` makes in
    /// the current animation, or zero if it is not animating.
    pub fn animation_order(&self, cubicle: Cubicle) -> i32 {
        self.current_move().map_or(0, |mv| mv.order(cubicle))
    }

    /// Returns the composition of every committed move.
    pub fn global_permutation(&self) -> &Permutation {
        &self.global
    }
    /// Returns the moves waiting to be animated, in the order they will run.
    pub fn pending(&self) -> impl '_ + Iterator<Item = &Move> {
        self.queue.iter()
    }
    /// Returns the IDs of committed moves, oldest first.
    pub fn history(&self) -> &[MoveId] {
        &self.history
    }

    /// Returns the state of a move, or `None` if it was never submitted.
    pub fn move_state(&self, id: MoveId) -> Option<MoveState> {
        if self.current_move().is_some_and(|mv| mv.id() == id) {
            Some(MoveState::Animating)
        } else if self.queue.iter().any(|mv| mv.id() == id) {
            Some(MoveState::Pending)
        } else if self.committed.contains(&id) {
            Some(MoveState::Committed)
        } else {
            None
        }
    }

    /// Starts queued moves until one is animating or the queue is empty.
    fn advance(&mut self, transitions: &mut Vec<Transition>) {
        while self.current.is_none() {
            let Some(mv) = self.queue.pop_front() else {
                return;
            };
            let expected = self.prefs.expected_completions(mv.twist());
            log::debug!("starting move {mv} ({}), expecting {expected} signals", mv.id());
            transitions.push(Transition::Started(mv.id()));
            self.current = Some(InFlightMove {
                mv,
                received: 0,
                expected,
            });
            if expected == 0 {
                self.commit(transitions);
            }
        }
    }

    fn commit(&mut self, transitions: &mut Vec<Transition>) {
        let Some(InFlightMove { mv, .. }) = self.current.take() else {
            return;
        };
        log::debug!("committing move {mv} ({})", mv.id());
        self.global = self.global.apply(mv.permutation());
        transitions.push(Transition::Committed(mv.id()));
        self.history.push(mv.id());
        self.committed.insert(mv.id());
    }
}
