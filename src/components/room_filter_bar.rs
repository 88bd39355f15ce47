//! Status / floor / search controls for the selected building.

use leptos::prelude::*;

use crate::state::units::UnitsState;
use crate::util::room_filter::StatusFilter;

#[component]
pub fn RoomFilterBar(units: RwSignal<UnitsState>) -> impl IntoView {
    view! {
        <div class="room-filters">
            <label class="room-filters__field">
                "Status"
                <select
                    class="room-filters__select"
                    on:change=move |ev| {
                        let status = StatusFilter::parse(&event_target_value(&ev));
                        units.update(|u| u.filters.status = status);
                    }
                    prop:value=move || units.get().filters.status.as_str()
                >
                    {StatusFilter::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </label>

            <label class="room-filters__field">
                "Floor"
                <select
                    class="room-filters__select"
                    on:change=move |ev| {
                        let floor = event_target_value(&ev);
                        units.update(|u| u.filters.floor = floor);
                    }
                    prop:value=move || units.get().filters.floor
                >
                    <option value="">"All"</option>
                    {move || {
                        units
                            .get()
                            .floor_options()
                            .into_iter()
                            .map(|f| view! { <option value=f.clone()>{f.clone()}</option> })
                            .collect_view()
                    }}
                </select>
            </label>

            <input
                class="room-filters__search"
                type="search"
                placeholder="Search Room"
                prop:value=move || units.get().filters.search
                on:input=move |ev| {
                    let search = event_target_value(&ev);
                    units.update(|u| u.filters.search = search);
                }
            />

            <label class="room-filters__toggle">
                <input
                    type="checkbox"
                    prop:checked=move || units.get().filters.available_only
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        units.update(|u| u.filters.available_only = checked);
                    }
                />
                "Available only"
            </label>

            <Show when=move || !units.get().filters.is_empty()>
                <button class="btn room-filters__clear" on:click=move |_| units.update(UnitsState::clear_filters)>
                    "Clear filters"
                </button>
            </Show>
        </div>
    }
}
