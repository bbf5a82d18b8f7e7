//! Entity trait implementation for the selection state machine.
//!
//! All transition rules live here: Idle-only triggers, the 16-tick spin, the
//! exact-name match with first-entry fallback, and the abort path back to
//! Idle.

use async_trait::async_trait;

use super::commands::{SelectionCommand, SelectionEvent};
use crate::framework::StateEntity;
use crate::model::{
    PickResult, Provenance, Selection, SelectionState, LUCKY_PICK_REASON, SPIN_TICKS,
};

#[async_trait]
impl StateEntity for Selection {
    type Command = SelectionCommand;
    type Event = SelectionEvent;
    type Snapshot = SelectionState;
    type Context = ();

    fn snapshot(&self) -> SelectionState {
        self.state.clone()
    }

    async fn handle_command(
        &mut self,
        command: SelectionCommand,
        _ctx: &(),
    ) -> Result<SelectionEvent, String> {
        match command {
            SelectionCommand::StartRandom => {
                if !self.state.is_idle() {
                    return Ok(SelectionEvent::Ignored);
                }
                self.state = SelectionState::RandomSpinning {
                    ticks_remaining: SPIN_TICKS,
                    highlighted: None,
                };
                Ok(SelectionEvent::Accepted)
            }
            SelectionCommand::AdvanceSpin => {
                let ticks_remaining = match &self.state {
                    SelectionState::RandomSpinning { ticks_remaining, .. } => *ticks_remaining,
                    _ => return Ok(SelectionEvent::Ignored),
                };
                if ticks_remaining > 1 {
                    let item = self.catalog.random().clone();
                    self.state = SelectionState::RandomSpinning {
                        ticks_remaining: ticks_remaining - 1,
                        highlighted: Some(item.id.clone()),
                    };
                    Ok(SelectionEvent::Cycling(item))
                } else {
                    // Final tick: a fresh uniform draw commits the result.
                    let result = PickResult {
                        item: self.catalog.random().clone(),
                        reason: LUCKY_PICK_REASON.to_string(),
                        provenance: Provenance::Random,
                    };
                    self.state = SelectionState::Result(result.clone());
                    Ok(SelectionEvent::Committed(result))
                }
            }
            SelectionCommand::StartAi => {
                if !self.state.is_idle() {
                    return Ok(SelectionEvent::Ignored);
                }
                self.state = SelectionState::AiThinking;
                Ok(SelectionEvent::Accepted)
            }
            SelectionCommand::CompleteAi { menu_name, reason } => {
                if self.state != SelectionState::AiThinking {
                    return Ok(SelectionEvent::Ignored);
                }
                let item = self
                    .catalog
                    .by_name(&menu_name)
                    .unwrap_or_else(|| self.catalog.first())
                    .clone();
                let result = PickResult {
                    item,
                    reason,
                    provenance: Provenance::Ai,
                };
                self.state = SelectionState::Result(result.clone());
                Ok(SelectionEvent::Committed(result))
            }
            SelectionCommand::AbortAi => {
                if self.state != SelectionState::AiThinking {
                    return Ok(SelectionEvent::Ignored);
                }
                self.state = SelectionState::Idle;
                Ok(SelectionEvent::Idled)
            }
            SelectionCommand::Reset => {
                self.state = SelectionState::Idle;
                Ok(SelectionEvent::Idled)
            }
        }
    }
}
