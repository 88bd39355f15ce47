//! Maintenance-request list and dialog lifecycle.
//!
//! DESIGN
//! ======
//! The page keeps one `MaintenanceState` in a signal. Synchronous transitions
//! (open, edit, close, delete confirmation) are methods here; the network
//! round-trips are free async functions that take the API by reference and
//! return plain results, so the page never holds a signal borrow across an
//! await and tests can drive the flow with a fake API.
//!
//! Every successful write is followed by exactly one full list refetch. There
//! is no optimistic or incremental list update.

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod maintenance_test;

use crate::net::api::DashboardApi;
use crate::net::error::ApiError;
use crate::net::notify::{Notifier, NotifyEvent, TemplateParams};
use crate::net::types::{MaintenanceRequest, RequestPayload, Tenant};
use crate::state::toast::ToastKind;
use crate::util::rooms::{BUILDINGS, room_choices};

/// Which request dialog is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DialogMode {
    #[default]
    Closed,
    Create,
    Edit {
        id: String,
    },
}

impl DialogMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit { .. })
    }
}

/// Property and room resolved from the requester's tenant record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub property: String,
    pub room_number: String,
}

impl From<&Tenant> for Placement {
    fn from(tenant: &Tenant) -> Self {
        Self { property: tenant.property.clone(), room_number: tenant.room_number.clone() }
    }
}

/// Reasons a submission is refused before any network call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("The request dialog is not open.")]
    NotOpen,
    #[error("A submission is already in progress.")]
    Busy,
    #[error("Describe the issue before submitting.")]
    MissingDescription,
    #[error("A requester email is required.")]
    MissingRequester,
}

/// Create-or-update target for a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update { id: String },
}

/// A validated submission ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub mode: SubmitMode,
    pub payload: RequestPayload,
}

/// Result of the email notification that follows a successful write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotificationOutcome {
    Skipped,
    Sent,
    Failed(String),
}

/// Everything that happened after a successful write.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitOutcome {
    pub event: NotifyEvent,
    pub notification: NotificationOutcome,
    /// The refetched list, or why it could not be fetched.
    pub refreshed: Result<Vec<MaintenanceRequest>, ApiError>,
}

/// Request list plus create/edit/delete dialog state.
#[derive(Clone, Debug)]
pub struct MaintenanceState {
    pub requests: Vec<MaintenanceRequest>,
    pub loading: bool,
    pub error: Option<String>,
    pub dialog: DialogMode,
    pub form: RequestPayload,
    pub room_choices: Vec<String>,
    pub submitting: bool,
    pub delete_target: Option<MaintenanceRequest>,
    pub deleting: bool,
    pub placement: Option<Placement>,
}

impl Default for MaintenanceState {
    fn default() -> Self {
        Self {
            requests: Vec::new(),
            loading: true,
            error: None,
            dialog: DialogMode::Closed,
            form: RequestPayload::default(),
            room_choices: Vec::new(),
            submitting: false,
            delete_target: None,
            deleting: false,
            placement: None,
        }
    }
}

impl MaintenanceState {
    /// Record the first list fetch.
    pub fn finish_load(&mut self, result: Result<Vec<MaintenanceRequest>, ApiError>) {
        self.loading = false;
        match result {
            Ok(requests) => {
                self.requests = requests;
                self.error = None;
            }
            Err(e) => self.error = Some(e.user_message()),
        }
    }

    /// Remember the requester's tenant placement; an open create form picks
    /// it up immediately.
    pub fn apply_placement(&mut self, placement: Placement) {
        if self.dialog == DialogMode::Create {
            self.form.property.clone_from(&placement.property);
            self.form.room_number.clone_from(&placement.room_number);
            self.refresh_room_choices();
        }
        self.placement = Some(placement);
    }

    /// Blank form for `requester`, prefilled with their placement.
    pub fn reset_form(&mut self, requester: &str) {
        self.form = RequestPayload::for_requester(requester);
        if let Some(placement) = &self.placement {
            self.form.property.clone_from(&placement.property);
            self.form.room_number.clone_from(&placement.room_number);
        }
        self.refresh_room_choices();
    }

    pub fn open_create(&mut self, requester: &str) {
        self.reset_form(requester);
        self.dialog = DialogMode::Create;
    }

    pub fn open_edit(&mut self, request: &MaintenanceRequest) {
        self.form = RequestPayload::from_request(request);
        self.refresh_room_choices();
        self.dialog = DialogMode::Edit { id: request.id.clone() };
    }

    /// Close the dialog; the form is kept until the next open.
    pub fn close(&mut self) {
        self.dialog = DialogMode::Closed;
    }

    /// Change the form's property, keeping the room only if it still exists.
    pub fn set_property(&mut self, property: &str) {
        property.clone_into(&mut self.form.property);
        self.refresh_room_choices();
        if !self.room_choices.contains(&self.form.room_number) {
            self.form.room_number.clear();
        }
    }

    fn refresh_room_choices(&mut self) {
        self.room_choices = room_choices(BUILDINGS, &self.form.property);
    }

    /// # Errors
    ///
    /// Returns the first missing required field.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.form.description.trim().is_empty() {
            return Err(FormError::MissingDescription);
        }
        if self.form.tenant_name.trim().is_empty() {
            return Err(FormError::MissingRequester);
        }
        Ok(())
    }

    /// Validate the open form and mark the submission in flight.
    ///
    /// New requests take property and room from the requester's placement
    /// when one was resolved; edits keep the request's own values.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] (and leaves state untouched) if the dialog is
    /// closed, a submission is already running, or a required field is blank.
    pub fn begin_submit(&mut self) -> Result<Submission, FormError> {
        if self.submitting {
            return Err(FormError::Busy);
        }
        let mode = match &self.dialog {
            DialogMode::Closed => return Err(FormError::NotOpen),
            DialogMode::Create => SubmitMode::Create,
            DialogMode::Edit { id } => SubmitMode::Update { id: id.clone() },
        };
        self.validate()?;

        let mut payload = self.form.clone();
        if let (SubmitMode::Create, Some(placement)) = (&mode, &self.placement) {
            payload.property.clone_from(&placement.property);
            payload.room_number.clone_from(&placement.room_number);
        }
        self.submitting = true;
        Ok(Submission { mode, payload })
    }

    /// Apply a successful write: replace the list (if refetched), reset and
    /// close the dialog.
    pub fn finish_submit(&mut self, refreshed: Option<Vec<MaintenanceRequest>>, requester: &str) {
        if let Some(requests) = refreshed {
            self.requests = requests;
            self.error = None;
        }
        self.submitting = false;
        self.reset_form(requester);
        self.dialog = DialogMode::Closed;
    }

    /// A failed write leaves the form and dialog exactly as they were.
    pub fn fail_submit(&mut self) {
        self.submitting = false;
    }

    pub fn request_delete(&mut self, request: &MaintenanceRequest) {
        self.delete_target = Some(request.clone());
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
    }

    /// Mark the confirmed delete in flight and return the target id.
    ///
    /// Returns `None` when nothing is awaiting confirmation or a delete is
    /// already running.
    pub fn begin_delete(&mut self) -> Option<String> {
        if self.deleting {
            return None;
        }
        let id = self.delete_target.as_ref()?.id.clone();
        self.deleting = true;
        Some(id)
    }

    /// The request is gone server-side: close the confirmation and replace
    /// the list if it was refetched.
    pub fn finish_delete(&mut self, refreshed: Option<Vec<MaintenanceRequest>>) {
        if let Some(requests) = refreshed {
            self.requests = requests;
            self.error = None;
        }
        self.deleting = false;
        self.delete_target = None;
    }

    /// A failed delete keeps the confirmation open for another try.
    pub fn fail_delete(&mut self) {
        self.deleting = false;
    }
}

/// Send one create-or-update call, notify, then refetch the list once.
///
/// # Errors
///
/// Returns the write error; nothing else is attempted in that case.
pub async fn submit_request<A, N>(api: &A, notifier: &N, submission: &Submission) -> Result<SubmitOutcome, ApiError>
where
    A: DashboardApi,
    N: Notifier,
{
    let event = match &submission.mode {
        SubmitMode::Create => {
            api.create_request(&submission.payload).await?;
            NotifyEvent::Created
        }
        SubmitMode::Update { id } => {
            api.update_request(id, &submission.payload).await?;
            NotifyEvent::Updated
        }
    };

    let notification = if notifier.enabled() {
        match notifier.notify(event, &TemplateParams::from_payload(&submission.payload)).await {
            Ok(()) => NotificationOutcome::Sent,
            Err(e) => NotificationOutcome::Failed(e.user_message()),
        }
    } else {
        NotificationOutcome::Skipped
    };

    let refreshed = api.list_requests().await;
    Ok(SubmitOutcome { event, notification, refreshed })
}

/// Toasts describing a completed submission for `requester`.
pub fn outcome_messages(outcome: &SubmitOutcome, requester: &str) -> Vec<(ToastKind, String)> {
    let mut messages = vec![match outcome.event {
        NotifyEvent::Created => (ToastKind::Success, "Maintenance request submitted.".to_owned()),
        NotifyEvent::Updated => (ToastKind::Success, "Maintenance request updated.".to_owned()),
    }];
    match (&outcome.notification, outcome.event) {
        (NotificationOutcome::Skipped, _) => {}
        (NotificationOutcome::Sent, NotifyEvent::Created) => {
            messages.push((ToastKind::Success, format!("Confirmation email sent to {requester}")));
        }
        (NotificationOutcome::Sent, NotifyEvent::Updated) => {
            messages.push((ToastKind::Success, format!("Update email sent to {requester}")));
        }
        (NotificationOutcome::Failed(e), _) => {
            messages.push((ToastKind::Error, format!("Request saved, but the email could not be sent: {e}")));
        }
    }
    if let Err(e) = &outcome.refreshed {
        messages.push((ToastKind::Error, refresh_failure_message(e)));
    }
    messages
}

/// Delete one request, then refetch the list once.
///
/// The inner result is the refetch; it can fail after the delete went through.
///
/// # Errors
///
/// Returns the delete error; no refetch is attempted in that case.
pub async fn delete_request<A: DashboardApi>(
    api: &A,
    id: &str,
) -> Result<Result<Vec<MaintenanceRequest>, ApiError>, ApiError> {
    api.delete_request(id).await?;
    Ok(api.list_requests().await)
}

/// Toast for a refetch that failed after a successful write.
pub fn refresh_failure_message(error: &ApiError) -> String {
    format!("Could not refresh requests: {}", error.user_message())
}
