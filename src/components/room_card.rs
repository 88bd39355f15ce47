//! Single room tile in the units grid.

use leptos::prelude::*;

use crate::util::rooms::Room;

#[component]
pub fn RoomCard(room: Room) -> impl IntoView {
    let status = if room.is_rented { "Rented" } else { "Available" };
    let occupant = room
        .tenant
        .as_ref()
        .map(|t| t.name.clone().filter(|n| !n.trim().is_empty()).unwrap_or_else(|| t.email.clone()));

    view! {
        <div class="room-card" class:room-card--rented=room.is_rented>
            <h4 class="room-card__number">{format!("Room {}", room.room_number)}</h4>
            <p class="room-card__property">{room.property}</p>
            <span class="room-card__status">{status}</span>
            {occupant.map(|who| view! { <p class="room-card__tenant">{who}</p> })}
        </div>
    }
}
