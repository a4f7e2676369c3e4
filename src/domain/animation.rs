use crate::domain::complexity::{CostModel, InputSize, MIN_INPUT_SIZE, SamplePoint};

/// Lifecycle of one animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    Running(InputSize),
    Done,
}

/// Domain entity - bounded step sequencer.
///
/// Owns no timer itself; the application layer awaits the delay between
/// `advance()` calls and holds the abort handle. Draining a started
/// sequencer yields exactly the n = 1..=50 points in order.
#[derive(Debug, Clone)]
pub struct AnimationSequencer {
    state: AnimationState,
}

impl AnimationSequencer {
    pub fn new() -> Self {
        Self { state: AnimationState::Idle }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running(_))
    }

    /// Begin a run from n = 1. A second start while running is ignored
    /// and reported as `false`; starting from Done restarts.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = AnimationState::Running(InputSize::from(MIN_INPUT_SIZE));
        true
    }

    /// Emit the point for the current n and step forward, moving to Done
    /// after the terminal value. Returns `None` when not running.
    pub fn advance(&mut self) -> Option<SamplePoint> {
        let AnimationState::Running(n) = self.state else {
            return None;
        };
        let point = CostModel::sample(n);
        self.state = match n.next() {
            Some(next) => AnimationState::Running(next),
            None => AnimationState::Done,
        };
        Some(point)
    }

    /// Abandon the run without finishing it.
    pub fn cancel(&mut self) {
        self.state = AnimationState::Idle;
    }
}

impl Default for AnimationSequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_sequencer_emits_nothing() {
        let mut seq = AnimationSequencer::new();
        assert_eq!(seq.state(), AnimationState::Idle);
        assert!(seq.advance().is_none());
    }

    #[test]
    fn start_while_running_is_ignored() {
        let mut seq = AnimationSequencer::new();
        assert!(seq.start());
        seq.advance();
        seq.advance();
        assert!(!seq.start());
        // Counter kept its place.
        assert_eq!(seq.advance().unwrap().n.value(), 3);
    }

    #[test]
    fn full_drain_yields_fifty_points_then_done() {
        let mut seq = AnimationSequencer::new();
        seq.start();
        let mut emitted = Vec::new();
        while let Some(p) = seq.advance() {
            emitted.push(p.n.value());
        }
        assert_eq!(emitted.len(), 50);
        assert_eq!(emitted.first(), Some(&1));
        assert_eq!(emitted.last(), Some(&50));
        assert!(emitted.windows(2).all(|w| w[1] == w[0] + 1));
        assert_eq!(seq.state(), AnimationState::Done);
    }

    #[test]
    fn cancel_and_restart_begin_from_one() {
        let mut seq = AnimationSequencer::new();
        seq.start();
        for _ in 0..10 {
            seq.advance();
        }
        seq.cancel();
        assert_eq!(seq.state(), AnimationState::Idle);
        assert!(seq.start());
        assert_eq!(seq.advance().unwrap().n.value(), 1);
    }
}
