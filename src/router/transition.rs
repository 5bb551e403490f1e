//! Screen transitions
//!
//! A transition is started by the router and finished by the host once the
//! slide animation has run to completion.

use std::time::Duration;

use super::ScreenId;

/// Length of the slide animation between two screens
pub const TRANSITION_DURATION: Duration = Duration::from_millis(260);

/// Slide direction of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// New screen slides in from the right
    Forward,
    /// Previous screen slides back in from the left
    Backward,
}

/// A transition between two screens that has not finished animating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Outgoing screen (None on the very first navigation)
    pub from: Option<ScreenId>,
    /// Incoming screen
    pub to: ScreenId,
    pub direction: Direction,
    /// Rebuild the whole screen set once the transition finishes
    pub reload_all: bool,
}

impl Transition {
    pub fn forward(from: Option<ScreenId>, to: ScreenId) -> Self {
        Self {
            from,
            to,
            direction: Direction::Forward,
            reload_all: false,
        }
    }

    pub fn backward(from: Option<ScreenId>, to: ScreenId, reload_all: bool) -> Self {
        Self {
            from,
            to,
            direction: Direction::Backward,
            reload_all,
        }
    }

    /// Backward transitions keep the outgoing screen visible until the
    /// animation completes.
    pub fn defers_swap(&self) -> bool {
        self.direction == Direction::Backward
    }

    /// Screen that should be drawn while the transition is in flight
    pub fn visible(&self) -> ScreenId {
        if self.defers_swap() {
            self.from.unwrap_or(self.to)
        } else {
            self.to
        }
    }
}
