//! Maintenance request card with admin edit/delete actions.

#[cfg(test)]
#[path = "request_card_test.rs"]
mod request_card_test;

use leptos::prelude::*;

use crate::net::types::{MaintenanceRequest, Priority, RequestStatus};
use crate::util::date::display_date;

fn status_badge_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "badge badge--pending",
        RequestStatus::InProgress => "badge badge--in-progress",
        RequestStatus::Completed => "badge badge--completed",
    }
}

fn priority_badge_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "badge badge--low",
        Priority::Medium => "badge badge--medium",
        Priority::High => "badge badge--high",
        Priority::Urgent => "badge badge--urgent",
    }
}

#[component]
pub fn RequestCard(
    request: MaintenanceRequest,
    #[prop(into)] is_admin: Signal<bool>,
    on_edit: Callback<MaintenanceRequest>,
    on_delete: Callback<MaintenanceRequest>,
) -> impl IntoView {
    let service_date = display_date(request.preferred_date.as_deref());
    let created = display_date(request.created_at.as_deref());
    let edit_target = request.clone();
    let delete_target = request.clone();

    view! {
        <li class="request-card">
            <Show when=move || is_admin.get()>
                <div class="request-card__actions">
                    <button
                        class="request-card__edit"
                        title="Edit request"
                        on:click={
                            let edit_target = edit_target.clone();
                            move |_| on_edit.run(edit_target.clone())
                        }
                    >
                        "✎"
                    </button>
                    <button
                        class="request-card__delete"
                        title="Delete request"
                        on:click={
                            let delete_target = delete_target.clone();
                            move |_| on_delete.run(delete_target.clone())
                        }
                    >
                        "✕"
                    </button>
                </div>
            </Show>

            <h3 class="request-card__title">{request.request_title}</h3>
            <dl class="request-card__fields">
                <dt>"Status"</dt>
                <dd><span class=status_badge_class(request.status)>{request.status.as_str()}</span></dd>
                <dt>"Priority"</dt>
                <dd><span class=priority_badge_class(request.priority)>{request.priority.as_str()}</span></dd>
                <dt>"Description"</dt>
                <dd>{request.description}</dd>
                <dt>"Property"</dt>
                <dd class="request-card__property">{request.property}</dd>
                <dt>"Room Number"</dt>
                <dd>{request.room_number}</dd>
                <dt>"Requestor Email"</dt>
                <dd>{request.tenant_name}</dd>
                <dt>"Service Date"</dt>
                <dd>{service_date}</dd>
                <dt>"Requested On"</dt>
                <dd>{created}</dd>
            </dl>
        </li>
    }
}
