//! List/search pages.
//!
//! A [`ListPage`] keeps the full record list fetched from the backend (the
//! master list) and the subset currently shown after client-side search.
//! Mutations made through the page re-fetch the master list afterwards.

use std::fmt;

use serde_json::Value;

use crate::auth::Session;
use crate::clients::RestClient;
use crate::console::{
    ConfirmError, Confirmable, ConfirmationModal, EditForm, Editable, FormError, FormHooks,
    Mutation, SaveOutcome, Toast,
};
use crate::rest::{ChangeSet, ResourceError, ResourceResponse, RestResource};

/// A resource that can be shown in a [`ListPage`].
pub trait Listing: RestResource {
    /// The projection shown as one table row.
    type Row: Clone + fmt::Debug + Send + Sync;

    /// Projects a record to its row.
    fn to_row(&self) -> Self::Row;

    /// Returns the id used to order rows. Rows without an id sort first.
    fn row_id(row: &Self::Row) -> u64;

    /// Returns the strings a search query is matched against.
    fn search_terms(row: &Self::Row) -> Vec<String>;
}

/// What happens to the search query when a mutation re-fetches the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterPolicy {
    /// Clear the query and show every row.
    #[default]
    ResetAfterMutation,
    /// Keep the query and re-apply it to the new list.
    Preserve,
}

/// The current search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
}

impl FilterState {
    /// Returns the query as typed.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns `true` if no query is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Clears the query.
    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Returns `true` if any of `terms` contains the query, ignoring case.
    ///
    /// An empty query matches everything.
    #[must_use]
    pub fn matches(&self, terms: &[String]) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        terms.iter().any(|term| term.to_lowercase().contains(&needle))
    }
}

#[derive(Default)]
struct PageHooks {
    reload: bool,
    toast: Option<Toast>,
}

impl FormHooks for PageHooks {
    fn reload(&mut self) {
        self.reload = true;
    }

    fn notify(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }
}

/// A page listing every record of one resource, with search.
#[derive(Debug)]
pub struct ListPage<R: Listing> {
    master: Vec<R::Row>,
    displayed: Vec<R::Row>,
    loading: bool,
    toast: Option<Toast>,
    filter: FilterState,
    policy: FilterPolicy,
}

impl<R: Listing> Default for ListPage<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Listing> ListPage<R> {
    /// Creates an empty page. Call [`fetch_all`](Self::fetch_all) to load it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            master: Vec::new(),
            displayed: Vec::new(),
            loading: false,
            toast: None,
            filter: FilterState::default(),
            policy: FilterPolicy::default(),
        }
    }

    /// Sets what happens to the search query after a mutation.
    #[must_use]
    pub const fn with_filter_policy(mut self, policy: FilterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns every fetched row, ordered by id.
    #[must_use]
    pub fn master(&self) -> &[R::Row] {
        &self.master
    }

    /// Returns the rows matching the current search.
    #[must_use]
    pub fn rows(&self) -> &[R::Row] {
        &self.displayed
    }

    /// Returns `true` while a request issued by the page is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the last toast.
    #[must_use]
    pub const fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Dismisses the toast.
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Returns the search state.
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Loads every record, ordered by id ascending.
    ///
    /// The active search is re-applied to the fresh list rather than
    /// cleared; only mutations clear it, per [`FilterPolicy`]. Failures are
    /// logged and leave the previous rows in place.
    pub async fn fetch_all(&mut self, client: &RestClient, session: &Session) {
        self.loading = true;
        match R::list_all(client, session).await {
            Ok(response) => {
                tracing::debug!(resource = R::NAME, count = response.len(), "List fetched");
                self.replace_records(&response);
            }
            Err(error) => {
                tracing::error!(resource = R::NAME, error = %error, "Unable to fetch records");
            }
        }
        self.loading = false;
    }

    /// Replaces the master list and re-applies the current search.
    pub fn replace_records(&mut self, records: &[R]) {
        let mut rows: Vec<R::Row> = records.iter().map(R::to_row).collect();
        rows.sort_by_key(R::row_id);
        self.master = rows;
        self.apply_filter();
    }

    /// Filters the displayed rows by `value`. Client-side only.
    pub fn on_search_changed(&mut self, value: &str) {
        self.filter.query = value.to_string();
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        self.displayed = self
            .master
            .iter()
            .filter(|row| self.filter.matches(&R::search_terms(row)))
            .cloned()
            .collect();
    }

    async fn refetch_after_mutation(&mut self, client: &RestClient, session: &Session) {
        if self.policy == FilterPolicy::ResetAfterMutation {
            self.filter.clear();
        }
        self.fetch_all(client, session).await;
    }

    fn record_outcome<T>(&mut self, mutation: Mutation, result: &Result<T, ResourceError>) {
        if let Err(error) = result {
            tracing::error!(resource = R::NAME, %mutation, error = %error, "Mutation failed");
        }
        self.toast = Some(Toast::for_mutation(R::NAME, mutation, result.is_ok()));
    }

    /// Creates a record, toasts the outcome, and re-fetches.
    ///
    /// # Errors
    ///
    /// Returns the [`ResourceError`] from the create call. The page is
    /// interactive again either way.
    pub async fn add(
        &mut self,
        client: &RestClient,
        session: &Session,
        fields: &Value,
    ) -> Result<R, ResourceError> {
        self.loading = true;
        let result = R::create(client, session, fields).await;
        self.record_outcome(Mutation::Add, &result);
        self.loading = false;
        self.refetch_after_mutation(client, session).await;
        result.map(ResourceResponse::into_inner)
    }

    /// Applies a change set to a record, toasts the outcome, and re-fetches.
    ///
    /// # Errors
    ///
    /// Returns the [`ResourceError`] from the update call.
    pub async fn update(
        &mut self,
        client: &RestClient,
        session: &Session,
        id: R::Id,
        changes: &ChangeSet,
    ) -> Result<R, ResourceError> {
        self.loading = true;
        let result = R::update(client, session, id, changes).await;
        self.record_outcome(Mutation::Update, &result);
        self.loading = false;
        self.refetch_after_mutation(client, session).await;
        result.map(ResourceResponse::into_inner)
    }

    /// Deletes a record, toasts the outcome, and re-fetches.
    ///
    /// # Errors
    ///
    /// Returns the [`ResourceError`] from the delete call.
    pub async fn remove(
        &mut self,
        client: &RestClient,
        session: &Session,
        id: R::Id,
    ) -> Result<(), ResourceError> {
        self.loading = true;
        let result = R::delete(client, session, id).await;
        self.record_outcome(Mutation::Delete, &result);
        self.loading = false;
        self.refetch_after_mutation(client, session).await;
        result
    }
}

impl<R: Listing + Editable> ListPage<R> {
    /// Saves an edit form opened from this page.
    ///
    /// The form's toast is shown on the page. A successful save re-fetches
    /// the list; a failed one re-fetches too, so the table reflects whatever
    /// the backend kept.
    ///
    /// # Errors
    ///
    /// Returns the form's error. Validation failures send nothing and leave
    /// the page untouched.
    pub async fn submit_edit(
        &mut self,
        form: &mut EditForm<R>,
        client: &RestClient,
        session: &Session,
    ) -> Result<SaveOutcome<R>, FormError> {
        let mut hooks = PageHooks::default();
        self.loading = true;
        let result = form.save(client, session, &mut hooks).await;
        self.loading = false;

        if let Some(toast) = hooks.toast {
            self.toast = Some(toast);
        }
        if hooks.reload || matches!(result, Err(FormError::Resource(_))) {
            self.refetch_after_mutation(client, session).await;
        }
        result
    }
}

impl<R: Listing + Confirmable> ListPage<R> {
    /// Runs a confirmed delete from a modal opened on this page.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmError::NotConfirmed`] without touching the page if
    /// the gate is locked. Other errors are toasted before being returned.
    pub async fn confirm_delete(
        &mut self,
        modal: &mut ConfirmationModal<R>,
        client: &RestClient,
        session: &Session,
    ) -> Result<(), ConfirmError> {
        if !modal.gate().is_confirmed() {
            return modal.confirm(client, session).await;
        }

        self.loading = true;
        let result = modal.confirm(client, session).await;
        if let Err(error) = &result {
            tracing::error!(resource = R::NAME, error = %error, "Unable to delete record");
        }
        self.toast = Some(Toast::for_mutation(R::NAME, Mutation::Delete, result.is_ok()));
        self.loading = false;
        self.refetch_after_mutation(client, session).await;
        result
    }
}

// Verify page types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FilterState>();
    assert_send_sync::<ListPage<crate::rest::resources::Country>>();
};
