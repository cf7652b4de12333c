// Pure decision function for map actions.
//
// Responsibilities
// - Map each action onto exactly one mutation and pass its payload through.
// - `SetMapReady` always decides `SET_MAP_READY(true)`.

use crate::modules::map::core::mutations::MapMutation;
use crate::modules::map::use_cases::dispatch_map_action::action::MapAction;

pub fn decide(action: MapAction) -> MapMutation {
    match action {
        MapAction::SetAddMode(payload) => MapMutation::SetAddMode(payload),
        MapAction::SetMapReady => MapMutation::SetMapReady(true),
        MapAction::SetShowMeetups(payload) => MapMutation::SetShowMeetups(payload),
    }
}
