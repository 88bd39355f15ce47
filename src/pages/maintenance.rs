//! Maintenance requests page: request list plus create/edit/delete dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requesters open a new request for their own unit; administrators also
//! edit status, priority, and service date, and delete requests. Each write
//! is followed by a full list refetch (see `state::maintenance`).

use leptos::prelude::*;

use crate::components::delete_request_dialog::DeleteRequestDialog;
use crate::components::request_card::RequestCard;
use crate::components::request_dialog::RequestDialog;
use crate::components::toast_stack::push_toast;
use crate::net::api::RestApi;
use crate::net::notify::EmailJsNotifier;
use crate::net::types::MaintenanceRequest;
use crate::state::auth::AuthState;
use crate::state::maintenance::MaintenanceState;
use crate::state::toast::{ToastKind, ToastState};

#[component]
pub fn MaintenancePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = expect_context::<RestApi>();
    let notifier = expect_context::<EmailJsNotifier>();
    let state = RwSignal::new(MaintenanceState::default());

    let is_admin = Signal::derive(move || auth.get().is_admin());

    // Initial list fetch.
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            use crate::net::api::DashboardApi as _;

            let result = api.list_requests().await;
            if let Err(e) = &result {
                crate::util::console::error(&format!("request list fetch failed: {e}"));
            }
            state.update(|s| s.finish_load(result));
        });
    }

    // Resolve the requester's unit once their email is known.
    let looked_up = RwSignal::new(None::<String>);
    Effect::new({
        let api = api.clone();
        move || {
            let email = auth.get().email();
            if email.is_empty() || looked_up.get_untracked().as_deref() == Some(email.as_str()) {
                return;
            }
            looked_up.set(Some(email.clone()));
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    use crate::net::api::DashboardApi as _;

                    match api.tenant_by_email(&email).await {
                        Ok(tenant) => state.update(|s| s.apply_placement((&tenant).into())),
                        Err(e) => crate::util::console::warn(&format!("tenant lookup failed: {e}")),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &api;
        }
    });

    let on_open_create = move |_| {
        let email = auth.get_untracked().email();
        state.update(|s| s.open_create(&email));
    };
    let on_edit = Callback::new(move |request: MaintenanceRequest| state.update(|s| s.open_edit(&request)));
    let on_delete = Callback::new(move |request: MaintenanceRequest| state.update(|s| s.request_delete(&request)));
    let on_cancel = Callback::new(move |()| state.update(MaintenanceState::close));
    let on_delete_cancel = Callback::new(move |()| state.update(MaintenanceState::cancel_delete));

    let on_submit = Callback::new({
        let api = api.clone();
        let notifier = notifier.clone();
        move |()| {
            let mut begun = None;
            state.update(|s| begun = Some(s.begin_submit()));
            let submission = match begun {
                Some(Ok(submission)) => submission,
                Some(Err(e)) => {
                    push_toast(toasts, ToastKind::Error, e.to_string());
                    return;
                }
                None => return,
            };

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let notifier = notifier.clone();
                leptos::task::spawn_local(async move {
                    use crate::state::maintenance::{outcome_messages, submit_request};

                    let requester = auth.get_untracked().email();
                    match submit_request(&api, &notifier, &submission).await {
                        Ok(outcome) => {
                            for (kind, message) in outcome_messages(&outcome, &submission.payload.tenant_name) {
                                push_toast(toasts, kind, message);
                            }
                            state.update(|s| s.finish_submit(outcome.refreshed.ok(), &requester));
                        }
                        Err(e) => {
                            crate::util::console::error(&format!("request submit failed: {e}"));
                            push_toast(toasts, ToastKind::Error, "Failed to submit request.");
                            state.update(MaintenanceState::fail_submit);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, &notifier, submission);
                state.update(MaintenanceState::fail_submit);
            }
        }
    });

    let on_delete_confirm = Callback::new({
        let api = api.clone();
        move |()| {
            let mut begun = None;
            state.update(|s| begun = s.begin_delete());
            let Some(id) = begun else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    use crate::state::maintenance::{delete_request, refresh_failure_message};

                    match delete_request(&api, &id).await {
                        Ok(refreshed) => {
                            crate::util::console::info(&format!("deleted request {id}"));
                            if let Err(e) = &refreshed {
                                push_toast(toasts, ToastKind::Error, refresh_failure_message(e));
                            }
                            state.update(|s| s.finish_delete(refreshed.ok()));
                        }
                        Err(e) => {
                            crate::util::console::error(&format!("request delete failed: {e}"));
                            state.update(MaintenanceState::fail_delete);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, id);
                state.update(MaintenanceState::fail_delete);
            }
        }
    });
    let deleting = Signal::derive(move || state.get().deleting);

    view! {
        <div class="maintenance-page">
            <header class="maintenance-page__header">
                <button class="btn btn--primary" on:click=on_open_create>
                    "Request Maintenance"
                </button>
            </header>

            <Show
                when=move || !state.get().loading
                fallback=move || view! { <p class="maintenance-page__status">"Loading..."</p> }
            >
                <Show
                    when=move || state.get().error.is_none()
                    fallback=move || {
                        view! {
                            <p class="maintenance-page__status">
                                {move || format!("Error: {}", state.get().error.unwrap_or_default())}
                            </p>
                        }
                    }
                >
                    <section class="maintenance-page__list">
                        <h2>"Maintenance Requests"</h2>
                        <Show
                            when=move || !state.get().requests.is_empty()
                            fallback=move || {
                                view! { <p class="maintenance-page__empty">"No maintenance requests found."</p> }
                            }
                        >
                            <ul class="maintenance-page__cards">
                                {move || {
                                    state
                                        .get()
                                        .requests
                                        .into_iter()
                                        .map(|request| {
                                            view! {
                                                <RequestCard
                                                    request=request
                                                    is_admin=is_admin
                                                    on_edit=on_edit
                                                    on_delete=on_delete
                                                />
                                            }
                                        })
                                        .collect_view()
                                }}
                            </ul>
                        </Show>
                    </section>
                </Show>
            </Show>

            <Show when=move || state.get().dialog.is_open()>
                <RequestDialog state=state is_admin=is_admin on_submit=on_submit on_cancel=on_cancel/>
            </Show>
            <Show when=move || state.get().delete_target.is_some()>
                <DeleteRequestDialog deleting=deleting on_confirm=on_delete_confirm on_cancel=on_delete_cancel/>
            </Show>
        </div>
    }
}
