//! Timer tokens with per-kind generations
//!
//! Every scheduled timer carries the generation current at scheduling time.
//! Scheduling again bumps the generation, so only the most recent timer of a
//! kind is honoured when it fires. That is all debouncing needs.

use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TimerKind {
    /// Quiet period after the last resize
    ResizeDebounce,
    /// Container had no usable width
    LayoutRetry,
    /// End of the staggered entrance
    EntranceSettle,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub generation: u64,
}

#[derive(Clone, Debug, Default)]
pub struct TimerGenerations {
    resize: u64,
    retry: u64,
    settle: u64,
}

impl TimerGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, kind: TimerKind) -> &mut u64 {
        match kind {
            TimerKind::ResizeDebounce => &mut self.resize,
            TimerKind::LayoutRetry => &mut self.retry,
            TimerKind::EntranceSettle => &mut self.settle,
        }
    }

    pub fn current(&self, kind: TimerKind) -> u64 {
        match kind {
            TimerKind::ResizeDebounce => self.resize,
            TimerKind::LayoutRetry => self.retry,
            TimerKind::EntranceSettle => self.settle,
        }
    }

    /// Token for a new timer; earlier tokens of this kind become stale
    pub fn next(&mut self, kind: TimerKind) -> TimerToken {
        let slot = self.slot(kind);
        *slot += 1;
        TimerToken { kind, generation: *slot }
    }

    /// Make any outstanding timer of this kind stale
    pub fn invalidate(&mut self, kind: TimerKind) {
        *self.slot(kind) += 1;
    }

    pub fn is_current(&self, token: TimerToken) -> bool {
        self.current(token.kind) == token.generation
    }
}
