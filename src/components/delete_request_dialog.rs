//! Confirmation dialog before deleting a maintenance request.

use leptos::prelude::*;

#[component]
pub fn DeleteRequestDialog(
    #[prop(into)] deleting: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Maintenance Request"</h2>
                <p class="dialog__danger">
                    "Are you sure you want to delete this maintenance request? This action cannot be undone."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" disabled=move || deleting.get() on:click=move |_| on_confirm.run(())>
                        {move || if deleting.get() { "Deleting…" } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
