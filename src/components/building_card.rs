//! Building summary card on the units view.

use leptos::prelude::*;

use crate::state::units::UnitsState;

/// Clickable card with total/available counts; toggles the room grid.
#[component]
pub fn BuildingCard(name: &'static str, units: RwSignal<UnitsState>) -> impl IntoView {
    let summary = move || units.get().summary(name);
    let selected = move || units.get().selected_building.as_deref() == Some(name);

    view! {
        <div
            class="building-card"
            class:building-card--selected=selected
            on:click=move |_| units.update(|u| u.toggle_building(name))
        >
            <span class="building-card__icon" aria-hidden="true">"🏢"</span>
            <h3 class="building-card__name">{format!("{name} Building")}</h3>
            <p class="building-card__count">{move || format!("Total Rooms: {}", summary().total)}</p>
            <p class="building-card__count">{move || format!("Available Rooms: {}", summary().available)}</p>
            <button class="btn btn--primary building-card__toggle">
                {move || if selected() { "Hide Rooms" } else { "View Rooms" }}
            </button>
        </div>
    }
}
