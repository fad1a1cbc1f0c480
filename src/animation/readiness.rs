//! Waiting for the animation primitive to show up
//!
//! The page may load the tweening library after this module. Initialisation
//! polls at a fixed interval and, when a cap is configured, stops after that
//! many attempts with a warning.

use crate::error::GalleryError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// The dependency is there, go ahead
    Ready,
    /// Check again after this many milliseconds
    RetryAfter(u32),
    /// Attempts exhausted
    GaveUp,
}

#[derive(Clone, Debug)]
pub struct DependencyPoll {
    name: String,
    interval_ms: u32,
    max_attempts: Option<u32>,
    attempts: u32,
}

impl DependencyPoll {
    pub fn new(name: impl Into<String>, interval_ms: u32, max_attempts: Option<u32>) -> Self {
        Self {
            name: name.into(),
            interval_ms,
            max_attempts,
            attempts: 0,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Record one check of the dependency
    pub fn poll(&mut self, available: bool) -> PollOutcome {
        if available {
            if self.attempts > 0 {
                log::debug!("{} became available after {} attempt(s)", self.name, self.attempts);
            }
            return PollOutcome::Ready;
        }

        self.attempts += 1;
        let err = GalleryError::DependencyNotReady(self.name.clone());
        match self.max_attempts {
            Some(max) if self.attempts >= max => {
                log::warn!("{}; giving up after {} attempts", err, self.attempts);
                PollOutcome::GaveUp
            }
            _ => {
                if self.attempts == 1 {
                    log::debug!("{}; polling every {} ms", err, self.interval_ms);
                }
                PollOutcome::RetryAfter(self.interval_ms)
            }
        }
    }
}
