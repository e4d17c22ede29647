//! Headless admin console state.
//!
//! The console is the editing layer over the resource client: edit forms
//! with field validation, typed-confirmation delete modals, and list pages
//! with client-side search. Nothing here renders; a UI reads the state and
//! calls the operations.
//!
//! Every component is mutated through `&mut self`, so a page cannot issue
//! overlapping requests.

mod confirm;
mod dialog;
pub mod form;
mod list;
mod notify;

pub use confirm::{ConfirmError, Confirmable, ConfirmationGate, ConfirmationModal, GateState};
pub use dialog::Dialog;
pub use form::{
    CloseBehavior, DraftValue, EditForm, Editable, FieldKind, FieldPattern, FieldRule, FieldSpec,
    FormError, FormHooks, FormState, SaveOutcome,
};
pub use list::{FilterPolicy, FilterState, ListPage, Listing};
pub use notify::{Mutation, Toast, ToastKind};
