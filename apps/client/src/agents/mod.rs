//! Table participants.
//!
//! Every seat is an [`Agent`]: one human driven by UI input, robots for the
//! rest. Agents learn about the table only through events and model queries and
//! act only through the controller.

mod deliberation;
mod human;
mod robot;

use std::time::Duration;

pub use deliberation::{Deliberation, Slot};
pub use human::{Choice, HumanAgent, Selection};
pub use robot::AutonomousAgent;

use crate::domain::Position;

/// Robot thinking time before passing.
pub const PASS_DELAY: Duration = Duration::from_millis(1000);
/// Robot thinking time before leading a trick.
pub const TRICK_START_DELAY: Duration = Duration::from_millis(2000);
/// Robot thinking time before following in a trick.
pub const TRICK_PLAY_DELAY: Duration = Duration::from_millis(1000);

pub enum Agent {
    Human(HumanAgent),
    Autonomous(AutonomousAgent),
}

impl Agent {
    pub fn position(&self) -> Position {
        match self {
            Agent::Human(h) => h.position(),
            Agent::Autonomous(r) => r.position(),
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Agent::Human(_))
    }

    pub fn as_human(&self) -> Option<&HumanAgent> {
        match self {
            Agent::Human(h) => Some(h),
            Agent::Autonomous(_) => None,
        }
    }
}
