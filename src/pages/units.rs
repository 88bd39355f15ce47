//! Unit information page: building cards and the derived room grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tenants are fetched once on mount; rooms are synthesized client-side from
//! the static building list, so a failed fetch leaves the page with zero
//! rooms rather than a stale list.

use leptos::prelude::*;

use crate::components::building_card::BuildingCard;
use crate::components::room_card::RoomCard;
use crate::components::room_filter_bar::RoomFilterBar;
use crate::net::api::RestApi;
use crate::state::units::UnitsState;
use crate::util::rooms::BUILDINGS;

#[component]
pub fn UnitsPage() -> impl IntoView {
    let api = expect_context::<RestApi>();
    let units = RwSignal::new(UnitsState { loading: true, ..UnitsState::default() });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api::DashboardApi as _;

        let result = api.list_tenants().await;
        if let Err(e) = &result {
            crate::util::console::error(&format!("tenant fetch failed: {e}"));
        }
        units.update(|u| u.finish_load(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = api;

    view! {
        <div class="units-page">
            <header class="units-page__header">
                <h2>"Unit Information"</h2>
            </header>

            <Show when=move || units.get().error.is_some()>
                <p class="units-page__error">{move || units.get().error.unwrap_or_default()}</p>
            </Show>

            <div class="units-page__buildings">
                {BUILDINGS
                    .iter()
                    .map(|b| view! { <BuildingCard name=b.name units=units/> })
                    .collect_view()}
            </div>

            <Show when=move || units.get().selected_building.is_some()>
                <section class="units-page__rooms">
                    <h3>
                        {move || {
                            format!("{} Building - Room Details", units.get().selected_building.unwrap_or_default())
                        }}
                    </h3>
                    <RoomFilterBar units=units/>
                    <Show
                        when=move || !units.get().visible_rooms().is_empty()
                        fallback=move || {
                            view! {
                                <p class="units-page__empty">
                                    {move || if units.get().loading { "Loading rooms..." } else { "No rooms match the filters." }}
                                </p>
                            }
                        }
                    >
                        <div class="units-page__grid">
                            {move || {
                                units
                                    .get()
                                    .visible_rooms()
                                    .into_iter()
                                    .map(|room| view! { <RoomCard room=room/> })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </section>
            </Show>
        </div>
    }
}
