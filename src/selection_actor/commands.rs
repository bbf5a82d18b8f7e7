//! Command vocabulary for the selection actor.
//!
//! Triggers (`StartRandom`, `StartAi`) are accepted only from `Idle`; any
//! other state answers [`SelectionEvent::Ignored`] and leaves the machine
//! untouched. The spin and the external AI round-trip are driven by
//! [`SelectionClient`](crate::clients::SelectionClient), which feeds the
//! intermediate commands back into the actor.

use crate::model::{MenuItem, PickResult};

/// Operations on the selection state machine.
#[derive(Debug, Clone)]
pub enum SelectionCommand {
    /// Begin a random pick: Idle -> RandomSpinning.
    StartRandom,
    /// One animation tick of the running spin. The final tick commits.
    AdvanceSpin,
    /// Begin an AI recommendation: Idle -> AiThinking. The caller must hold
    /// a credential before issuing this.
    StartAi,
    /// The external call succeeded: AiThinking -> Result. The menu name is
    /// matched case-sensitively against the catalog; no match selects the
    /// first entry. The reason is carried verbatim.
    CompleteAi { menu_name: String, reason: String },
    /// The external call failed: AiThinking -> Idle. No result is produced.
    AbortAi,
    /// Dismiss the current result (or cancel any state): back to Idle.
    Reset,
}

/// Results from SelectionCommands.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// A trigger was accepted and the machine left Idle.
    Accepted,
    /// The command did not apply in the current state; nothing changed.
    Ignored,
    /// An intermediate spin tick; the item under the cursor.
    Cycling(MenuItem),
    /// A result was committed (final spin tick or completed AI call).
    Committed(PickResult),
    /// The machine returned to Idle (reset or aborted AI call).
    Idled,
}
