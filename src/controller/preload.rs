//! Image preload batch
//!
//! Completes once every image has either loaded or failed. A failure never
//! aborts the batch and there is no partially-ready state.

use super::host::ImageOutcome;

#[derive(Clone, Debug)]
pub struct PreloadBatch {
    sources: Vec<String>,
    settled: Vec<bool>,
    remaining: usize,
    failures: usize,
}

impl PreloadBatch {
    pub fn new(sources: Vec<String>) -> Self {
        let count = sources.len();
        Self {
            sources,
            settled: vec![false; count],
            remaining: count,
            failures: 0,
        }
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn source(&self, index: usize) -> Option<&str> {
        self.sources.get(index).map(String::as_str)
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Record one image; returns true when this call completed the batch
    ///
    /// Repeated or out-of-range reports are ignored.
    pub fn settle(&mut self, index: usize, outcome: ImageOutcome) -> bool {
        match self.settled.get_mut(index) {
            Some(done) if !*done => {
                *done = true;
                self.remaining -= 1;
                if outcome == ImageOutcome::Failed {
                    self.failures += 1;
                }
                self.remaining == 0
            }
            _ => false,
        }
    }
}
