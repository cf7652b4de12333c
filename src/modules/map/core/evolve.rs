use crate::modules::map::core::mutations::MapMutation;
use crate::modules::map::core::state::MapUiState;

pub fn set_add_mode(state: &mut MapUiState, value: bool) {
    state.add_mode = value;
}

pub fn set_map_ready(state: &mut MapUiState, value: bool) {
    state.map_ready = value;
}

pub fn set_show_meetups(state: &mut MapUiState, value: bool) {
    state.show_meetups = value;
}

pub fn evolve(mut state: MapUiState, mutation: MapMutation) -> MapUiState {
    match mutation {
        MapMutation::SetAddMode(value) => set_add_mode(&mut state, value),
        MapMutation::SetMapReady(value) => set_map_ready(&mut state, value),
        MapMutation::SetShowMeetups(value) => set_show_meetups(&mut state, value),
    }
    state
}
