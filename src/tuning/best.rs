use std::fmt;

use super::Gains;

/// A settle time together with the gains that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestResult {
    pub ticks: usize,
    pub gains: Gains,
}

impl fmt::Display for BestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.ticks, self.gains)
    }
}

/// Fastest result seen so far. Only strictly faster offers replace it, so the
/// recorded history is strictly decreasing in `ticks`.
#[derive(Debug, Clone, Default)]
pub struct BestTracker {
    history: Vec<BestResult>,
}

impl BestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `candidate` if it beats the current best; returns it when it does.
    pub fn offer(&mut self, candidate: BestResult) -> Option<BestResult> {
        match self.best() {
            Some(best) if candidate.ticks >= best.ticks => None,
            _ => {
                self.history.push(candidate);
                Some(candidate)
            }
        }
    }

    pub fn best(&self) -> Option<BestResult> {
        self.history.last().copied()
    }

    /// Every improvement in the order it was found.
    pub fn history(&self) -> &[BestResult] {
        &self.history
    }
}
