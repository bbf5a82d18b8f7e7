use std::time::Duration;

use crate::model::{Catalog, MenuItem};

/// Number of animation ticks in a random spin before the result commits.
pub const SPIN_TICKS: u8 = 16;

/// Interval between spin ticks.
pub const SPIN_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Reason text attached to a committed random pick.
pub const LUCKY_PICK_REASON: &str =
    "The lucky draw has spoken! Enjoy lunch with the team.";

/// How a committed result was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Ai,
    Random,
}

/// A committed selection: the chosen dish, the reason shown to the team, and
/// where the pick came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PickResult {
    pub item: MenuItem,
    pub reason: String,
    pub provenance: Provenance,
}

/// The selection-mode state machine.
///
/// Exactly one state is active at a time. `Idle` is both the initial state
/// and the state reached after a result is dismissed. Failure of the external
/// recommendation call returns to `Idle`; no error state is ever entered.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionState {
    Idle,
    RandomSpinning {
        ticks_remaining: u8,
        /// Item id currently under the spin cursor, for visual cycling.
        highlighted: Option<String>,
    },
    AiThinking,
    Result(PickResult),
}

impl SelectionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SelectionState::Idle)
    }

    pub fn result(&self) -> Option<&PickResult> {
        match self {
            SelectionState::Result(result) => Some(result),
            _ => None,
        }
    }
}

/// Selection machine state plus the catalog it draws from.
#[derive(Debug, Clone)]
pub struct Selection {
    pub catalog: Catalog,
    pub state: SelectionState,
}

impl Selection {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: SelectionState::Idle,
        }
    }
}
