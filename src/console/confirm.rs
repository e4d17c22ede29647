//! Typed-confirmation delete modals.
//!
//! Deleting a record requires the operator to type an identifying phrase
//! (an email, an id, a country code). The delete button is armed only while
//! the typed text equals that phrase exactly.

use thiserror::Error;

use crate::auth::Session;
use crate::clients::RestClient;
use crate::console::Dialog;
use crate::rest::{ResourceError, RestResource};

/// A resource whose deletion is guarded by a typed phrase.
pub trait Confirmable: RestResource {
    /// The text the operator must type to arm the delete button.
    fn confirmation_phrase(&self) -> String;
}

/// Where a confirmation gate stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// The typed text does not match.
    Locked,
    /// The typed text matches; confirming is allowed.
    Armed,
    /// The confirmed action has been started. Terminal.
    Consumed,
}

/// Arms a destructive action only while typed text equals a target phrase.
///
/// The armed flag is recomputed from the current input on every call, so
/// typing past the target or deleting a character locks the gate again.
///
/// ```rust
/// use boxinator_admin::console::ConfirmationGate;
///
/// let mut gate = ConfirmationGate::new("user@example.com");
/// gate.validate_input("user@example.co");
/// assert!(!gate.is_confirmed());
/// gate.validate_input("user@example.com");
/// assert!(gate.is_confirmed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationGate {
    target: String,
    state: GateState,
}

impl ConfirmationGate {
    /// Creates a locked gate for `target`.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            state: GateState::Locked,
        }
    }

    /// Returns the phrase the operator must type.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> GateState {
        self.state
    }

    /// Re-derives the armed flag from the operator's current input.
    ///
    /// The comparison is exact and case-sensitive. Has no effect once the
    /// gate is consumed.
    pub fn validate_input(&mut self, input: &str) {
        if self.state == GateState::Consumed {
            return;
        }
        self.state = if input == self.target {
            GateState::Armed
        } else {
            GateState::Locked
        };
    }

    /// Returns `true` while the gate is armed.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.state == GateState::Armed
    }

    fn consume(&mut self) -> bool {
        if self.state != GateState::Armed {
            return false;
        }
        self.state = GateState::Consumed;
        true
    }
}

/// Errors raised by confirmation modals.
#[derive(Debug, Error)]
pub enum ConfirmError {
    /// The gate is not armed. Nothing was sent.
    #[error("Deletion has not been confirmed")]
    NotConfirmed,

    /// The record has no id and cannot be deleted.
    #[error("{resource} has no id")]
    MissingId {
        /// The resource name.
        resource: &'static str,
    },

    /// The delete call failed.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// A delete dialog guarded by a [`ConfirmationGate`].
#[derive(Debug)]
pub struct ConfirmationModal<R: Confirmable> {
    target: R,
    gate: ConfirmationGate,
    dialog: Dialog,
}

impl<R: Confirmable> ConfirmationModal<R> {
    /// Opens a modal asking to delete `target`.
    #[must_use]
    pub fn open(target: R) -> Self {
        let gate = ConfirmationGate::new(target.confirmation_phrase());
        Self {
            target,
            gate,
            dialog: Dialog::opened(),
        }
    }

    /// Returns the record to be deleted.
    #[must_use]
    pub const fn target(&self) -> &R {
        &self.target
    }

    /// Returns the gate.
    #[must_use]
    pub const fn gate(&self) -> &ConfirmationGate {
        &self.gate
    }

    /// Returns `true` while the dialog is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    /// Feeds the operator's current input to the gate.
    pub fn type_confirmation(&mut self, input: &str) {
        self.gate.validate_input(input);
    }

    /// Closes the modal without deleting.
    pub fn cancel(&mut self) {
        self.dialog.close();
    }

    /// Deletes the target if the gate is armed.
    ///
    /// Once the delete is sent the dialog closes whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmError::NotConfirmed`] while the gate is locked (or
    /// already consumed), and [`ConfirmError::Resource`] if the delete
    /// fails.
    pub async fn confirm(&mut self, client: &RestClient, session: &Session) -> Result<(), ConfirmError> {
        if !self.gate.consume() {
            tracing::warn!(resource = R::NAME, state = ?self.gate.state(), "Delete refused, not confirmed");
            return Err(ConfirmError::NotConfirmed);
        }

        let result = match self.target.get_id() {
            Some(id) => R::delete(client, session, id).await.map_err(ConfirmError::from),
            None => Err(ConfirmError::MissingId { resource: R::NAME }),
        };
        self.dialog.close();
        result
    }
}

// Verify confirmation types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfirmationGate>();
    assert_send_sync::<ConfirmError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_starts_locked() {
        let gate = ConfirmationGate::new("NO");
        assert_eq!(gate.state(), GateState::Locked);
        assert!(!gate.is_confirmed());
    }

    #[test]
    fn test_gate_follows_keystrokes() {
        let mut gate = ConfirmationGate::new("user@example.com");

        gate.validate_input("user@example.co");
        assert!(!gate.is_confirmed());

        gate.validate_input("user@example.com");
        assert!(gate.is_confirmed());

        gate.validate_input("user@example.co");
        assert!(!gate.is_confirmed());

        gate.validate_input("user@example.comm");
        assert!(!gate.is_confirmed());
    }

    #[test]
    fn test_gate_is_case_sensitive() {
        let mut gate = ConfirmationGate::new("NO");
        gate.validate_input("no");
        assert!(!gate.is_confirmed());
    }

    #[test]
    fn test_consumed_gate_never_rearms() {
        let mut gate = ConfirmationGate::new("7");
        gate.validate_input("7");
        assert!(gate.consume());

        gate.validate_input("7");
        assert_eq!(gate.state(), GateState::Consumed);
        assert!(!gate.is_confirmed());
        assert!(!gate.consume());
    }

    #[test]
    fn test_locked_gate_cannot_be_consumed() {
        let mut gate = ConfirmationGate::new("7");
        assert!(!gate.consume());
        assert_eq!(gate.state(), GateState::Locked);
    }
}
