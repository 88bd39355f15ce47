use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::types::{Priority, RequestStatus};

// =============================================================
// Fakes
// =============================================================

#[derive(Default)]
struct FakeApi {
    calls: RefCell<Vec<String>>,
    listed: Vec<MaintenanceRequest>,
    fail_write: bool,
    fail_list: bool,
}

impl FakeApi {
    fn with_list(listed: Vec<MaintenanceRequest>) -> Self {
        Self { listed, ..Self::default() }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn write_result(&self) -> Result<(), ApiError> {
        if self.fail_write {
            Err(ApiError::Status { status: 500, body: "boom".to_owned() })
        } else {
            Ok(())
        }
    }
}

impl DashboardApi for FakeApi {
    async fn list_tenants(&self) -> Result<Vec<Tenant>, ApiError> {
        self.record("list_tenants".to_owned());
        Ok(Vec::new())
    }

    async fn tenant_by_email(&self, email: &str) -> Result<Tenant, ApiError> {
        self.record(format!("tenant_by_email:{email}"));
        Err(ApiError::Status { status: 404, body: String::new() })
    }

    async fn list_requests(&self) -> Result<Vec<MaintenanceRequest>, ApiError> {
        self.record("list".to_owned());
        if self.fail_list {
            return Err(ApiError::Network("offline".to_owned()));
        }
        Ok(self.listed.clone())
    }

    async fn create_request(&self, payload: &RequestPayload) -> Result<(), ApiError> {
        self.record(format!("create:{}/{}", payload.property, payload.room_number));
        self.write_result()
    }

    async fn update_request(&self, id: &str, _payload: &RequestPayload) -> Result<(), ApiError> {
        self.record(format!("update:{id}"));
        self.write_result()
    }

    async fn delete_request(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("delete:{id}"));
        self.write_result()
    }
}

#[derive(Default)]
struct FakeNotifier {
    enabled: bool,
    fail: bool,
    sent: RefCell<Vec<NotifyEvent>>,
}

impl Notifier for FakeNotifier {
    fn enabled(&self) -> bool {
        self.enabled
    }

    async fn notify(&self, event: NotifyEvent, _params: &TemplateParams) -> Result<(), ApiError> {
        self.sent.borrow_mut().push(event);
        if self.fail {
            Err(ApiError::Network("smtp down".to_owned()))
        } else {
            Ok(())
        }
    }
}

fn request(id: &str) -> MaintenanceRequest {
    MaintenanceRequest {
        id: id.to_owned(),
        request_title: "Damage Report".to_owned(),
        priority: Priority::High,
        description: "Broken tap".to_owned(),
        tenant_name: "ana@example.com".to_owned(),
        property: "jade".to_owned(),
        room_number: "204".to_owned(),
        preferred_date: Some("2024-05-01T00:00:00.000Z".to_owned()),
        status: RequestStatus::InProgress,
        ..MaintenanceRequest::default()
    }
}

fn placement() -> Placement {
    Placement { property: "lalaine".to_owned(), room_number: "105".to_owned() }
}

fn open_valid_create(state: &mut MaintenanceState) {
    state.open_create("ana@example.com");
    state.form.description = "Leaking sink".to_owned();
}

// =============================================================
// Dialog transitions
// =============================================================

#[test]
fn default_state_is_loading_and_closed() {
    let state = MaintenanceState::default();
    assert!(state.loading);
    assert_eq!(state.dialog, DialogMode::Closed);
    assert!(!state.dialog.is_open());
    assert!(!state.submitting);
    assert!(!state.deleting);
}

#[test]
fn finish_load_success_sets_requests() {
    let mut state = MaintenanceState::default();
    state.finish_load(Ok(vec![request("r1")]));
    assert!(!state.loading);
    assert_eq!(state.requests.len(), 1);
    assert!(state.error.is_none());
}

#[test]
fn finish_load_failure_sets_error() {
    let mut state = MaintenanceState::default();
    state.finish_load(Err(ApiError::Status { status: 503, body: "Service down".to_owned() }));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Service down"));
}

#[test]
fn open_create_resets_form_to_defaults() {
    let mut state = MaintenanceState::default();
    state.form.description = "stale".to_owned();
    state.open_create("ana@example.com");
    assert_eq!(state.dialog, DialogMode::Create);
    assert_eq!(state.form, RequestPayload::for_requester("ana@example.com"));
    assert!(state.room_choices.is_empty());
}

#[test]
fn open_create_uses_placement() {
    let mut state = MaintenanceState::default();
    state.apply_placement(placement());
    state.open_create("ana@example.com");
    assert_eq!(state.form.property, "lalaine");
    assert_eq!(state.form.room_number, "105");
    assert_eq!(state.room_choices.len(), 28);
}

#[test]
fn apply_placement_updates_open_create_form_only() {
    let mut state = MaintenanceState::default();
    state.open_edit(&request("r1"));
    state.apply_placement(placement());
    assert_eq!(state.form.property, "jade");

    state.open_create("ana@example.com");
    state.apply_placement(Placement { property: "jade".to_owned(), room_number: "301".to_owned() });
    assert_eq!(state.form.property, "jade");
    assert_eq!(state.form.room_number, "301");
}

#[test]
fn open_edit_copies_request_fields() {
    let mut state = MaintenanceState::default();
    state.open_edit(&request("r1"));
    assert_eq!(state.dialog, DialogMode::Edit { id: "r1".to_owned() });
    assert!(state.dialog.is_edit());
    assert_eq!(state.form.request_title, "Damage Report");
    assert_eq!(state.form.priority, Priority::High);
    assert_eq!(state.form.status, RequestStatus::InProgress);
    assert_eq!(state.form.preferred_date, "2024-05-01");
    assert_eq!(state.room_choices.len(), 30);
}

#[test]
fn close_keeps_form_and_list() {
    let mut state = MaintenanceState::default();
    state.finish_load(Ok(vec![request("r1")]));
    open_valid_create(&mut state);
    state.close();
    assert_eq!(state.dialog, DialogMode::Closed);
    assert_eq!(state.form.description, "Leaking sink");
    assert_eq!(state.requests.len(), 1);
}

#[test]
fn set_property_keeps_valid_room() {
    let mut state = MaintenanceState::default();
    state.open_create("ana@example.com");
    state.set_property("jade");
    state.form.room_number = "210".to_owned();
    state.set_property("lalaine");
    assert_eq!(state.form.room_number, "210");
    assert_eq!(state.room_choices.len(), 28);
}

#[test]
fn set_property_clears_room_missing_from_new_building() {
    let mut state = MaintenanceState::default();
    state.open_create("ana@example.com");
    state.set_property("jade");
    state.form.room_number = "310".to_owned();
    state.set_property("lalaine");
    assert_eq!(state.form.room_number, "");
    state.form.room_number = "101".to_owned();
    state.set_property("");
    assert_eq!(state.form.room_number, "");
    assert!(state.room_choices.is_empty());
}

#[test]
fn delete_confirmation_round_trip() {
    let mut state = MaintenanceState::default();
    state.request_delete(&request("r9"));
    assert_eq!(state.delete_target.as_ref().map(|r| r.id.as_str()), Some("r9"));
    state.cancel_delete();
    assert!(state.delete_target.is_none());
}

// =============================================================
// Validation / begin_submit
// =============================================================

#[test]
fn validate_requires_description() {
    let mut state = MaintenanceState::default();
    state.open_create("ana@example.com");
    state.form.description = "   ".to_owned();
    assert_eq!(state.validate(), Err(FormError::MissingDescription));
}

#[test]
fn validate_requires_requester() {
    let mut state = MaintenanceState::default();
    open_valid_create(&mut state);
    state.form.tenant_name.clear();
    assert_eq!(state.validate(), Err(FormError::MissingRequester));
}

#[test]
fn begin_submit_refuses_closed_dialog() {
    let mut state = MaintenanceState::default();
    assert_eq!(state.begin_submit(), Err(FormError::NotOpen));
    assert!(!state.submitting);
}

#[test]
fn begin_submit_refuses_invalid_form_without_marking_busy() {
    let mut state = MaintenanceState::default();
    state.open_create("ana@example.com");
    assert_eq!(state.begin_submit(), Err(FormError::MissingDescription));
    assert!(!state.submitting);
}

#[test]
fn begin_submit_blocks_double_submission() {
    let mut state = MaintenanceState::default();
    open_valid_create(&mut state);
    assert!(state.begin_submit().is_ok());
    assert!(state.submitting);
    assert_eq!(state.begin_submit(), Err(FormError::Busy));
}

#[test]
fn begin_submit_create_applies_placement() {
    let mut state = MaintenanceState::default();
    state.apply_placement(placement());
    open_valid_create(&mut state);
    state.set_property("jade");
    let submission = state.begin_submit().unwrap();
    assert_eq!(submission.mode, SubmitMode::Create);
    assert_eq!(submission.payload.property, "lalaine");
    assert_eq!(submission.payload.room_number, "105");
}

#[test]
fn begin_submit_edit_keeps_request_placement() {
    let mut state = MaintenanceState::default();
    state.apply_placement(placement());
    state.open_edit(&request("r1"));
    let submission = state.begin_submit().unwrap();
    assert_eq!(submission.mode, SubmitMode::Update { id: "r1".to_owned() });
    assert_eq!(submission.payload.property, "jade");
    assert_eq!(submission.payload.room_number, "204");
}

// =============================================================
// Submit flow
// =============================================================

#[test]
fn submit_create_calls_create_then_one_refetch() {
    let api = FakeApi::with_list(vec![request("r1"), request("r2")]);
    let notifier = FakeNotifier::default();
    let mut state = MaintenanceState::default();
    state.apply_placement(placement());
    open_valid_create(&mut state);
    let submission = state.begin_submit().unwrap();

    let outcome = block_on(submit_request(&api, &notifier, &submission)).unwrap();

    assert_eq!(api.calls(), vec!["create:lalaine/105", "list"]);
    assert_eq!(outcome.event, NotifyEvent::Created);
    assert_eq!(outcome.notification, NotificationOutcome::Skipped);
    assert!(notifier.sent.borrow().is_empty());

    state.finish_submit(outcome.refreshed.ok(), "ana@example.com");
    assert_eq!(state.requests.len(), 2);
    assert_eq!(state.dialog, DialogMode::Closed);
    assert!(!state.submitting);
    assert!(state.form.description.is_empty());
}

#[test]
fn submit_update_calls_update_then_one_refetch() {
    let api = FakeApi::with_list(vec![request("r1")]);
    let notifier = FakeNotifier::default();
    let mut state = MaintenanceState::default();
    state.open_edit(&request("r1"));
    let submission = state.begin_submit().unwrap();

    let outcome = block_on(submit_request(&api, &notifier, &submission)).unwrap();

    assert_eq!(api.calls(), vec!["update:r1", "list"]);
    assert_eq!(outcome.event, NotifyEvent::Updated);
}

#[test]
fn submit_failure_skips_refetch_and_keeps_state() {
    let api = FakeApi { fail_write: true, ..FakeApi::default() };
    let notifier = FakeNotifier { enabled: true, ..FakeNotifier::default() };
    let mut state = MaintenanceState::default();
    state.finish_load(Ok(vec![request("r1")]));
    open_valid_create(&mut state);
    let before_form = state.form.clone();
    let submission = state.begin_submit().unwrap();

    let result = block_on(submit_request(&api, &notifier, &submission));

    assert_eq!(result.unwrap_err(), ApiError::Status { status: 500, body: "boom".to_owned() });
    assert_eq!(api.calls(), vec!["create:/"]);
    assert!(notifier.sent.borrow().is_empty());

    state.fail_submit();
    assert!(!state.submitting);
    assert_eq!(state.dialog, DialogMode::Create);
    assert_eq!(state.form, before_form);
    assert_eq!(state.requests.len(), 1);
}

#[test]
fn submit_sends_notification_when_enabled() {
    let api = FakeApi::default();
    let notifier = FakeNotifier { enabled: true, ..FakeNotifier::default() };
    let submission = Submission { mode: SubmitMode::Update { id: "r1".to_owned() }, payload: RequestPayload::default() };

    let outcome = block_on(submit_request(&api, &notifier, &submission)).unwrap();

    assert_eq!(outcome.notification, NotificationOutcome::Sent);
    assert_eq!(*notifier.sent.borrow(), vec![NotifyEvent::Updated]);
    assert_eq!(api.calls(), vec!["update:r1", "list"]);
}

#[test]
fn submit_notification_failure_still_refetches() {
    let api = FakeApi::default();
    let notifier = FakeNotifier { enabled: true, fail: true, ..FakeNotifier::default() };
    let submission = Submission { mode: SubmitMode::Create, payload: RequestPayload::default() };

    let outcome = block_on(submit_request(&api, &notifier, &submission)).unwrap();

    assert_eq!(outcome.notification, NotificationOutcome::Failed("network error: smtp down".to_owned()));
    assert_eq!(api.calls(), vec!["create:/", "list"]);
}

#[test]
fn submit_refetch_failure_is_reported_in_outcome() {
    let api = FakeApi { fail_list: true, ..FakeApi::default() };
    let notifier = FakeNotifier::default();
    let mut state = MaintenanceState::default();
    state.finish_load(Ok(vec![request("old")]));
    open_valid_create(&mut state);
    let submission = state.begin_submit().unwrap();

    let outcome = block_on(submit_request(&api, &notifier, &submission)).unwrap();
    assert!(outcome.refreshed.is_err());

    state.finish_submit(outcome.refreshed.clone().ok(), "ana@example.com");
    assert_eq!(state.requests[0].id, "old");
    assert_eq!(state.dialog, DialogMode::Closed);
}

// =============================================================
// Delete flow
// =============================================================

#[test]
fn delete_calls_delete_then_one_refetch() {
    let api = FakeApi::with_list(vec![request("r2")]);
    let mut state = MaintenanceState::default();
    state.finish_load(Ok(vec![request("r1"), request("r2")]));
    state.request_delete(&request("r1"));

    let id = state.begin_delete().unwrap();

    let refreshed = block_on(delete_request(&api, &id)).unwrap();
    assert_eq!(api.calls(), vec!["delete:r1", "list"]);

    state.finish_delete(refreshed.ok());
    assert_eq!(state.requests.len(), 1);
    assert!(state.delete_target.is_none());
    assert!(!state.deleting);
}

#[test]
fn delete_failure_skips_refetch() {
    let api = FakeApi { fail_write: true, ..FakeApi::default() };
    let result = block_on(delete_request(&api, "r1"));
    assert!(result.is_err());
    assert_eq!(api.calls(), vec!["delete:r1"]);
}

#[test]
fn delete_refetch_failure_still_reports_delete_success() {
    let api = FakeApi { fail_list: true, ..FakeApi::default() };
    let mut state = MaintenanceState::default();
    state.finish_load(Ok(vec![request("r1"), request("r2")]));
    state.request_delete(&request("r1"));
    let id = state.begin_delete().unwrap();

    let refreshed = block_on(delete_request(&api, &id)).unwrap();
    assert_eq!(api.calls(), vec!["delete:r1", "list"]);
    let Err(e) = &refreshed else {
        panic!("refetch should fail");
    };
    assert_eq!(refresh_failure_message(e), "Could not refresh requests: network error: offline");

    state.finish_delete(refreshed.ok());
    assert!(state.delete_target.is_none());
    assert!(!state.deleting);
    assert_eq!(state.requests.len(), 2);
}

#[test]
fn begin_delete_blocks_second_click() {
    let mut state = MaintenanceState::default();
    assert_eq!(state.begin_delete(), None);

    state.request_delete(&request("r1"));
    assert_eq!(state.begin_delete().as_deref(), Some("r1"));
    assert!(state.deleting);
    assert_eq!(state.begin_delete(), None);
}

#[test]
fn fail_delete_keeps_confirmation_open() {
    let mut state = MaintenanceState::default();
    state.request_delete(&request("r1"));
    state.begin_delete();

    state.fail_delete();
    assert!(!state.deleting);
    assert_eq!(state.delete_target.as_ref().map(|r| r.id.as_str()), Some("r1"));
    assert_eq!(state.begin_delete().as_deref(), Some("r1"));
}

// =============================================================
// Toast messages
// =============================================================

#[test]
fn outcome_messages_for_plain_create() {
    let outcome = SubmitOutcome { event: NotifyEvent::Created, notification: NotificationOutcome::Skipped, refreshed: Ok(Vec::new()) };
    assert_eq!(
        outcome_messages(&outcome, "ana@example.com"),
        vec![(ToastKind::Success, "Maintenance request submitted.".to_owned())]
    );
}

#[test]
fn outcome_messages_include_email_confirmation() {
    let outcome = SubmitOutcome { event: NotifyEvent::Updated, notification: NotificationOutcome::Sent, refreshed: Ok(Vec::new()) };
    let messages = outcome_messages(&outcome, "ana@example.com");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1], (ToastKind::Success, "Update email sent to ana@example.com".to_owned()));
}

#[test]
fn outcome_messages_report_failures() {
    let outcome = SubmitOutcome {
        event: NotifyEvent::Created,
        notification: NotificationOutcome::Failed("smtp down".to_owned()),
        refreshed: Err(ApiError::Network("offline".to_owned())),
    };
    let messages = outcome_messages(&outcome, "ana@example.com");
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].0, ToastKind::Error);
    assert!(messages[1].1.contains("smtp down"));
    assert_eq!(messages[2], (ToastKind::Error, "Could not refresh requests: network error: offline".to_owned()));
}
