//! Selection — the `[low, high]` pair and the ordering gate that updates it.
//!
//! The gate is a pure function so the accept/reject policy is testable
//! without any widget or event plumbing. An update that would push a thumb
//! past its sibling is rejected outright: no clamping to the sibling, no
//! epsilon tolerance, the value simply does not move for that event.

use serde::{Deserialize, Serialize};

/// The selected sub-range. Invariant after every accepted update:
/// `bounds.min <= low < high <= bounds.max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub low: f64,
    pub high: f64,
}

impl Selection {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Width of the selected band.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Which of the two thumbs an event addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Thumb {
    Low,
    High,
}

impl Thumb {
    pub fn other(self) -> Thumb {
        match self {
            Thumb::Low => Thumb::High,
            Thumb::High => Thumb::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Thumb::Low => "low",
            Thumb::High => "high",
        }
    }
}

/// Result of offering a candidate value to one thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateOutcome {
    Accepted(Selection),
    Rejected,
}

impl UpdateOutcome {
    pub fn accepted(self) -> Option<Selection> {
        match self {
            UpdateOutcome::Accepted(next) => Some(next),
            UpdateOutcome::Rejected => None,
        }
    }
}

/// Offer `candidate` as the new value of `thumb`.
///
/// The low thumb accepts only candidates strictly below the current high;
/// the high thumb only candidates strictly above the current low. A candidate
/// equal to the thumb's own current value is accepted (the caller reports it
/// again), a candidate crossing the sibling is rejected without mutation.
pub fn apply_update(current: Selection, thumb: Thumb, candidate: f64) -> UpdateOutcome {
    match thumb {
        Thumb::Low if candidate < current.high => {
            UpdateOutcome::Accepted(Selection::new(candidate, current.high))
        }
        Thumb::High if candidate > current.low => {
            UpdateOutcome::Accepted(Selection::new(current.low, candidate))
        }
        _ => UpdateOutcome::Rejected,
    }
}
