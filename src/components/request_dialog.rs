//! Create/edit dialog for maintenance requests.
//!
//! Priority, service date, and status are administrator fields. Property and
//! room are read-only for a new request when the requester's tenant record
//! resolved them; otherwise they are picked from the building list.

#[cfg(test)]
#[path = "request_dialog_test.rs"]
mod request_dialog_test;

use leptos::prelude::*;

use crate::net::types::{Priority, REQUEST_TITLES, RequestStatus};
use crate::state::maintenance::{DialogMode, MaintenanceState};
use crate::util::rooms::BUILDINGS;

fn dialog_title(mode: &DialogMode) -> &'static str {
    if mode.is_edit() { "Edit Maintenance Request" } else { "New Maintenance Request" }
}

fn submit_label(is_edit: bool, submitting: bool) -> &'static str {
    match (is_edit, submitting) {
        (true, true) => "Updating…",
        (false, true) => "Submitting…",
        (true, false) => "Update Request",
        (false, false) => "Submit Request",
    }
}

/// Whether property/room come from the tenant lookup instead of the pickers.
fn placement_locked(state: &MaintenanceState) -> bool {
    state.dialog == DialogMode::Create && state.placement.is_some()
}

#[component]
pub fn RequestDialog(
    state: RwSignal<MaintenanceState>,
    #[prop(into)] is_admin: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    });
    let is_edit = move || state.get().dialog.is_edit();
    let submitting = move || state.get().submitting;

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--request"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>{move || dialog_title(&state.get().dialog)}</h2>
                    <button class="dialog__close" title="Close" on:click=move |_| on_cancel.run(())>
                        "✕"
                    </button>
                </div>

                <form class="dialog__form" on:submit=on_form_submit>
                    <label class="dialog__label">
                        "Request Title"
                        <select
                            class="dialog__input"
                            prop:value=move || state.get().form.request_title
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.form.request_title = value);
                            }
                        >
                            {REQUEST_TITLES
                                .iter()
                                .map(|title| view! { <option value=*title>{*title}</option> })
                                .collect_view()}
                        </select>
                    </label>

                    <Show
                        when=move || !placement_locked(&state.get())
                        fallback=move || {
                            view! {
                                <p class="dialog__placement">
                                    {move || {
                                        let form = state.get().form;
                                        format!("{} · Room {}", form.property, form.room_number)
                                    }}
                                </p>
                            }
                        }
                    >
                        <div class="dialog__row">
                            <label class="dialog__label">
                                "Property"
                                <select
                                    class="dialog__input"
                                    prop:value=move || state.get().form.property.to_lowercase()
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.set_property(&value));
                                    }
                                >
                                    <option value="">"Select a property"</option>
                                    {BUILDINGS
                                        .iter()
                                        .map(|b| view! { <option value=b.name.to_lowercase()>{b.name}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                            <label class="dialog__label">
                                "Room Number"
                                <select
                                    class="dialog__input"
                                    prop:value=move || state.get().form.room_number
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.form.room_number = value);
                                    }
                                >
                                    <option value="">"Select a room number"</option>
                                    {move || {
                                        state
                                            .get()
                                            .room_choices
                                            .into_iter()
                                            .map(|room| view! { <option value=room.clone()>{room.clone()}</option> })
                                            .collect_view()
                                    }}
                                </select>
                            </label>
                        </div>
                    </Show>

                    <Show when=move || is_admin.get()>
                        <label class="dialog__label">
                            "Priority Level"
                            <select
                                class="dialog__input"
                                prop:value=move || state.get().form.priority.as_str()
                                on:change=move |ev| {
                                    if let Some(priority) = Priority::parse(&event_target_value(&ev)) {
                                        state.update(|s| s.form.priority = priority);
                                    }
                                }
                            >
                                {Priority::ALL
                                    .into_iter()
                                    .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </Show>

                    <label class="dialog__label">
                        "Description of Issue"
                        <textarea
                            class="dialog__input"
                            rows="4"
                            required
                            prop:value=move || state.get().form.description
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.form.description = value);
                            }
                        ></textarea>
                    </label>

                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Requestor Email"
                            <input
                                class="dialog__input"
                                type="text"
                                readonly
                                required
                                prop:value=move || state.get().form.tenant_name
                            />
                        </label>
                        <label class="dialog__label">
                            "Contact"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || state.get().form.contact
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| s.form.contact = value);
                                }
                            />
                        </label>
                    </div>

                    <Show when=move || is_admin.get()>
                        <label class="dialog__label">
                            "Service Date"
                            <input
                                class="dialog__input"
                                type="date"
                                prop:value=move || state.get().form.preferred_date
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| s.form.preferred_date = value);
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Status"
                            <select
                                class="dialog__input"
                                prop:value=move || state.get().form.status.as_str()
                                on:change=move |ev| {
                                    if let Some(status) = RequestStatus::parse(&event_target_value(&ev)) {
                                        state.update(|s| s.form.status = status);
                                    }
                                }
                            >
                                {RequestStatus::ALL
                                    .into_iter()
                                    .map(|st| view! { <option value=st.as_str()>{st.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </Show>

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=submitting>
                            {move || submit_label(is_edit(), submitting())}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
