//! Validated edit forms.
//!
//! An [`EditForm`] is bound to one record for one edit session. It holds a
//! draft per declared field, checks the field rules on submit, and sends
//! only the [`ChangeSet`] to the backend.
//!
//! # State Machine
//!
//! ```text
//! Pristine --set_*--> Editing --submit--> Submitting --ok--> Saved
//!                        ^          |                 \
//!                        |          v                  `--err--> Failed
//!                        +------ Failed (field errors)            |
//!                        +----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use boxinator_admin::console::EditForm;
//!
//! let mut form = EditForm::edit(&account);
//! form.set_text("email", "jane@x.com")?;
//! form.save(&client, &session, &mut page_hooks).await?;
//! ```

mod draft;
pub mod schema;

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::auth::Session;
use crate::clients::RestClient;
use crate::console::{Dialog, Mutation, Toast};
use crate::rest::{ChangeSet, ResourceError, RestResource};

pub use draft::DraftValue;
pub use schema::{FieldKind, FieldPattern, FieldRule, FieldSpec};

/// A resource that can be edited through an [`EditForm`].
pub trait Editable: RestResource {
    /// The editable fields, in display order.
    const FIELDS: &'static [FieldSpec];

    /// Returns the stored value of `field` as the backend sends it.
    ///
    /// The default reads the serialized record. Override it for fields the
    /// form edits in a different shape than they are stored (e.g. a nested
    /// object edited by name).
    fn field_value(&self, field: &str) -> Option<Value> {
        serde_json::to_value(self)
            .ok()
            .and_then(|mut value| value.get_mut(field).map(Value::take))
    }
}

/// Where an edit session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Drafts equal the original record.
    Pristine,
    /// At least one field was touched.
    Editing,
    /// Validation passed; the change is being sent.
    Submitting,
    /// The change was accepted (or there was nothing to send).
    Saved,
    /// Validation or the backend call failed. Editing may resume.
    Failed,
}

/// What happens to the dialog when saving fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CloseBehavior {
    /// Close after every save attempt, successful or not.
    #[default]
    Always,
    /// Close only after a successful save; keep the dialog open on failure.
    OnSuccess,
}

/// Callbacks the owner of a form supplies.
pub trait FormHooks {
    /// Called after a successful save so the owner can re-fetch.
    fn reload(&mut self);

    /// Shows a toast.
    fn notify(&mut self, toast: Toast);
}

/// How a save resolved when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome<R> {
    /// The backend accepted the change and returned the record.
    Saved(R),
    /// Nothing differed from the original; no request was sent.
    Unchanged,
}

/// Errors raised by edit forms.
#[derive(Debug, Error)]
pub enum FormError {
    /// One or more field rules failed. Nothing was sent.
    #[error("{} field(s) failed validation", .field_errors.len())]
    Invalid {
        /// Message per offending field.
        field_errors: BTreeMap<&'static str, &'static str>,
    },

    /// The field is not declared on this form.
    #[error("Unknown field: {field}")]
    UnknownField {
        /// The requested field name.
        field: String,
    },

    /// Text was given for a date field, or a date for a text field.
    #[error("Field {field} does not accept this kind of input")]
    KindMismatch {
        /// The field name.
        field: &'static str,
    },

    /// The form is not accepting this action in its current state.
    #[error("Form cannot do that while {state:?}")]
    InvalidState {
        /// The current state.
        state: FormState,
    },

    /// The backend call failed.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

enum Submission<Id> {
    Update { id: Id, changes: ChangeSet },
    Create { fields: Value },
}

/// A form bound to one record for one edit session.
#[derive(Debug)]
pub struct EditForm<R: Editable> {
    original: Option<R>,
    baseline: Map<String, Value>,
    drafts: BTreeMap<&'static str, DraftValue>,
    field_errors: BTreeMap<&'static str, &'static str>,
    state: FormState,
    dialog: Dialog,
    close_behavior: CloseBehavior,
}

impl<R: Editable> EditForm<R> {
    /// Opens an edit session on an existing record.
    #[must_use]
    pub fn edit(original: &R) -> Self {
        Self::edit_on(original, Utc::now().date_naive())
    }

    /// Opens an edit session, defaulting empty date fields to `today`.
    #[must_use]
    pub fn edit_on(original: &R, today: NaiveDate) -> Self {
        let mut drafts = BTreeMap::new();
        let mut baseline = Map::new();
        for spec in R::FIELDS {
            let draft = DraftValue::seed(spec.kind, original.field_value(spec.key).as_ref(), today);
            baseline.insert(spec.key.to_string(), draft.to_json(spec.kind));
            drafts.insert(spec.key, draft);
        }

        tracing::debug!(resource = R::NAME, "Edit session opened");
        Self {
            original: Some(original.clone()),
            baseline,
            drafts,
            field_errors: BTreeMap::new(),
            state: FormState::Pristine,
            dialog: Dialog::opened(),
            close_behavior: CloseBehavior::default(),
        }
    }

    /// Opens a blank form for creating a record.
    #[must_use]
    pub fn create() -> Self {
        Self::create_on(Utc::now().date_naive())
    }

    /// Opens a blank form, defaulting date fields to `today`.
    #[must_use]
    pub fn create_on(today: NaiveDate) -> Self {
        let drafts = R::FIELDS
            .iter()
            .map(|spec| (spec.key, DraftValue::seed(spec.kind, None, today)))
            .collect();

        Self {
            original: None,
            baseline: Map::new(),
            drafts,
            field_errors: BTreeMap::new(),
            state: FormState::Pristine,
            dialog: Dialog::opened(),
            close_behavior: CloseBehavior::default(),
        }
    }

    /// Sets what happens to the dialog when saving fails.
    #[must_use]
    pub const fn with_close_behavior(mut self, behavior: CloseBehavior) -> Self {
        self.close_behavior = behavior;
        self
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> FormState {
        self.state
    }

    /// Returns `true` while the dialog is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    /// Returns `true` for forms opened with [`create`](Self::create).
    #[must_use]
    pub const fn is_create(&self) -> bool {
        self.original.is_none()
    }

    /// Returns the record being edited.
    #[must_use]
    pub const fn original(&self) -> Option<&R> {
        self.original.as_ref()
    }

    /// Returns the draft of `field`.
    #[must_use]
    pub fn draft(&self, field: &str) -> Option<&DraftValue> {
        self.drafts.get(field)
    }

    /// Returns the messages of the last failed validation, by field.
    #[must_use]
    pub const fn field_errors(&self) -> &BTreeMap<&'static str, &'static str> {
        &self.field_errors
    }

    /// Returns the validation message for `field`, if any.
    #[must_use]
    pub fn field_error(&self, field: &str) -> Option<&'static str> {
        self.field_errors.get(field).copied()
    }

    /// Updates a text, number or choice field with raw operator input.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`], [`FormError::KindMismatch`] for
    /// date fields, or [`FormError::InvalidState`] once the form is saving
    /// or saved.
    pub fn set_text(&mut self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        let spec = self.touchable(field)?;
        if spec.kind == FieldKind::Date {
            return Err(FormError::KindMismatch { field: spec.key });
        }
        self.drafts.insert(spec.key, DraftValue::Text(value.into()));
        self.touch(spec.key);
        Ok(())
    }

    /// Updates a date field.
    ///
    /// # Errors
    ///
    /// Same as [`set_text`](Self::set_text), with `KindMismatch` for
    /// non-date fields.
    pub fn set_date(&mut self, field: &str, date: NaiveDate) -> Result<(), FormError> {
        let spec = self.touchable(field)?;
        if spec.kind != FieldKind::Date {
            return Err(FormError::KindMismatch { field: spec.key });
        }
        self.drafts.insert(spec.key, DraftValue::Date(date));
        self.touch(spec.key);
        Ok(())
    }

    fn touchable(&self, field: &str) -> Result<&'static FieldSpec, FormError> {
        if matches!(self.state, FormState::Submitting | FormState::Saved) {
            return Err(FormError::InvalidState { state: self.state });
        }
        R::FIELDS
            .iter()
            .find(|spec| spec.key == field)
            .ok_or_else(|| FormError::UnknownField {
                field: field.to_string(),
            })
    }

    fn touch(&mut self, field: &'static str) {
        self.field_errors.remove(field);
        self.state = FormState::Editing;
    }

    fn draft_json(&self) -> Map<String, Value> {
        R::FIELDS
            .iter()
            .filter_map(|spec| {
                self.drafts
                    .get(spec.key)
                    .map(|draft| (spec.key.to_string(), draft.to_json(spec.kind)))
            })
            .collect()
    }

    /// Returns the fields whose draft differs from the original record.
    ///
    /// For a create form this is every non-empty field.
    #[must_use]
    pub fn change_set(&self) -> ChangeSet {
        let current = self.draft_json();
        if self.is_create() {
            let mut changes = ChangeSet::new();
            for (key, value) in current {
                if !value.is_null() {
                    changes.insert(key, value);
                }
            }
            return changes;
        }
        ChangeSet::between(&Value::Object(self.baseline.clone()), &Value::Object(current))
    }

    /// Runs every field rule against the current drafts.
    ///
    /// On failure the form moves to `Failed` with the offending fields
    /// annotated. On success it moves to `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Invalid`] with one message per failing field,
    /// or [`FormError::InvalidState`] if the form is already submitting or
    /// saved.
    pub fn submit(&mut self) -> Result<ChangeSet, FormError> {
        if matches!(self.state, FormState::Submitting | FormState::Saved) {
            return Err(FormError::InvalidState { state: self.state });
        }

        let field_errors: BTreeMap<&'static str, &'static str> = R::FIELDS
            .iter()
            .filter_map(|spec| {
                let input = self.drafts.get(spec.key)?.as_text()?;
                spec.validate(input).map(|message| (spec.key, message))
            })
            .collect();

        if !field_errors.is_empty() {
            tracing::debug!(resource = R::NAME, failed = field_errors.len(), "Form validation failed");
            self.field_errors.clone_from(&field_errors);
            self.state = FormState::Failed;
            return Err(FormError::Invalid { field_errors });
        }

        self.field_errors.clear();
        self.state = FormState::Submitting;
        Ok(self.change_set())
    }

    /// Closes the dialog and discards the draft.
    pub fn cancel(&mut self) {
        self.dialog.close();
    }

    /// Validates, sends the change, and reports the outcome through `hooks`.
    ///
    /// - Success: `Saved`, `hooks.reload()`, success toast, dialog closed.
    /// - Nothing changed on an existing record: `Saved`, dialog closed, no
    ///   request, no reload.
    /// - Backend failure: `Failed`, error logged, error toast, dialog closed
    ///   unless [`CloseBehavior::OnSuccess`] is set.
    ///
    /// Validation failures return before any I/O and leave the dialog open.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Invalid`] for rule failures and
    /// [`FormError::Resource`] when the backend call fails.
    pub async fn save<H: FormHooks>(
        &mut self,
        client: &RestClient,
        session: &Session,
        hooks: &mut H,
    ) -> Result<SaveOutcome<R>, FormError> {
        let changes = self.submit()?;

        let submission = match self.original.as_ref().and_then(R::get_id) {
            Some(id) => Submission::Update { id, changes },
            None if self.is_create() => Submission::Create {
                fields: changes.into(),
            },
            None => {
                self.state = FormState::Failed;
                return Err(FormError::Resource(ResourceError::PathResolutionFailed {
                    resource: R::NAME,
                    operation: "update",
                }));
            }
        };

        let (mutation, result) = match submission {
            Submission::Update { changes, .. } if changes.is_empty() => {
                tracing::debug!(resource = R::NAME, "No changes to save");
                self.state = FormState::Saved;
                self.dialog.close();
                return Ok(SaveOutcome::Unchanged);
            }
            Submission::Update { id, changes } => (
                Mutation::Update,
                R::update(client, session, id, &changes).await,
            ),
            Submission::Create { fields } => {
                (Mutation::Add, R::create(client, session, &fields).await)
            }
        };

        match result {
            Ok(response) => {
                self.state = FormState::Saved;
                hooks.reload();
                hooks.notify(Toast::for_mutation(R::NAME, mutation, true));
                self.dialog.close();
                Ok(SaveOutcome::Saved(response.into_inner()))
            }
            Err(error) => {
                tracing::error!(resource = R::NAME, %mutation, error = %error, "Unable to save record");
                self.state = FormState::Failed;
                hooks.notify(Toast::for_mutation(R::NAME, mutation, false));
                if self.close_behavior == CloseBehavior::Always {
                    self.dialog.close();
                }
                Err(FormError::Resource(error))
            }
        }
    }
}

// Verify form types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FormError>();
    assert_send_sync::<EditForm<crate::rest::resources::Account>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::{Account, Country, Shipment};
    use serde_json::json;

    fn jane() -> Account {
        serde_json::from_value(json!({
            "id": 1,
            "firstName": "Jane",
            "email": "j@x.com"
        }))
        .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_edit_starts_pristine_and_open() {
        let form = EditForm::edit_on(&jane(), today());

        assert_eq!(form.state(), FormState::Pristine);
        assert!(form.is_open());
        assert!(form.change_set().is_empty());
    }

    #[test]
    fn test_email_edit_produces_single_field_change_set() {
        let mut form = EditForm::edit_on(&jane(), today());
        form.set_text("firstName", "Jane").unwrap();
        form.set_text("email", "jane@x.com").unwrap();

        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.change_set().to_json(), json!({"email": "jane@x.com"}));
    }

    #[test]
    fn test_untouched_default_date_is_not_a_change() {
        let mut form = EditForm::edit_on(&jane(), today());
        assert_eq!(
            form.draft("dateOfBirth"),
            Some(&DraftValue::Date(today()))
        );

        let birthday = NaiveDate::from_ymd_opt(1990, 4, 1).unwrap();
        form.set_date("dateOfBirth", birthday).unwrap();
        assert_eq!(
            form.change_set().get("dateOfBirth"),
            Some(&json!("1990-04-01"))
        );
    }

    #[test]
    fn test_stored_date_is_parsed_and_compared() {
        let account: Account = serde_json::from_value(json!({
            "id": 2,
            "dateOfBirth": "1990-04-01T00:00:00Z"
        }))
        .unwrap();
        let mut form = EditForm::edit_on(&account, today());

        form.set_date("dateOfBirth", NaiveDate::from_ymd_opt(1990, 4, 1).unwrap())
            .unwrap();
        assert!(form.change_set().is_empty());
    }

    #[test]
    fn test_numeric_fields_compare_after_coercion() {
        let account: Account = serde_json::from_value(json!({
            "id": 3,
            "zipCode": 4711,
            "contactNumber": 5550100
        }))
        .unwrap();
        let mut form = EditForm::edit_on(&account, today());

        form.set_text("zipCode", "04711").unwrap();
        form.set_text("contactNumber", "").unwrap();

        let changes = form.change_set();
        assert!(!changes.contains("zipCode"));
        assert_eq!(changes.get("contactNumber"), Some(&Value::Null));
    }

    #[test]
    fn test_submit_annotates_failing_fields() {
        let mut form = EditForm::edit_on(&jane(), today());
        form.set_text("firstName", "Jane99").unwrap();
        form.set_text("zipCode", "12ab").unwrap();

        let error = form.submit().unwrap_err();

        assert!(matches!(&error, FormError::Invalid { field_errors } if field_errors.len() == 2));
        assert_eq!(form.state(), FormState::Failed);
        assert!(form.field_error("firstName").is_some());
        assert!(form.field_error("zipCode").is_some());
        assert!(form.is_open());
    }

    #[test]
    fn test_editing_after_failure_clears_that_field_error() {
        let mut form = EditForm::edit_on(&jane(), today());
        form.set_text("firstName", "Jane99").unwrap();
        let _ = form.submit();

        form.set_text("firstName", "Janet").unwrap();

        assert_eq!(form.state(), FormState::Editing);
        assert!(form.field_error("firstName").is_none());
        assert!(form.submit().is_ok());
        assert_eq!(form.state(), FormState::Submitting);
    }

    #[test]
    fn test_unknown_and_mismatched_fields_are_rejected() {
        let mut form = EditForm::edit_on(&jane(), today());

        assert!(matches!(
            form.set_text("id", "9"),
            Err(FormError::UnknownField { field }) if field == "id"
        ));
        assert!(matches!(
            form.set_text("dateOfBirth", "1990-04-01"),
            Err(FormError::KindMismatch { field: "dateOfBirth" })
        ));
        assert!(matches!(
            form.set_date("email", today()),
            Err(FormError::KindMismatch { field: "email" })
        ));
    }

    #[test]
    fn test_create_form_collects_non_empty_fields() {
        let mut form: EditForm<Country> = EditForm::create_on(today());
        form.set_text("name", "Norway").unwrap();
        form.set_text("countryCode", "NO").unwrap();
        form.set_text("feeMultiplier", "1.5").unwrap();

        assert!(form.is_create());
        assert_eq!(
            form.change_set().to_json(),
            json!({"name": "Norway", "countryCode": "NO", "feeMultiplier": 1.5})
        );
    }

    #[test]
    fn test_non_finite_fee_multiplier_is_invalid() {
        let norway: Country = serde_json::from_value(json!({
            "id": 2,
            "name": "Norway",
            "countryCode": "NO",
            "feeMultiplier": 1.5
        }))
        .unwrap();

        for input in ["NaN", "inf", "-inf"] {
            let mut form = EditForm::edit_on(&norway, today());
            form.set_text("feeMultiplier", input).unwrap();

            assert!(matches!(form.submit(), Err(FormError::Invalid { .. })));
            assert!(form.field_error("feeMultiplier").is_some());
        }
    }

    #[test]
    fn test_shipment_destination_cannot_be_edited() {
        let shipment: Shipment = serde_json::from_value(json!({
            "id": 7,
            "receiver": "Kari",
            "weight": 4,
            "boxColour": "#ff0000",
            "destinationCountry": {"id": 2, "name": "Norway"}
        }))
        .unwrap();
        let mut form = EditForm::edit_on(&shipment, today());

        assert!(matches!(
            form.set_text("destinationCountry", "Sweden"),
            Err(FormError::UnknownField { field }) if field == "destinationCountry"
        ));
        form.set_text("receiver", "Ola").unwrap();
        assert_eq!(form.submit().unwrap().to_json(), json!({"receiver": "Ola"}));
    }

    #[test]
    fn test_cancel_closes_dialog() {
        let mut form = EditForm::edit_on(&jane(), today());
        form.cancel();
        assert!(!form.is_open());
    }
}
