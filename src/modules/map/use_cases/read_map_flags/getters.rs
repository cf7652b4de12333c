use crate::modules::map::core::state::MapUiState;

pub fn is_add_mode(state: &MapUiState) -> bool {
    state.add_mode
}

pub fn get_map_ready(state: &MapUiState) -> bool {
    state.map_ready
}

pub fn get_show_meetups(state: &MapUiState) -> bool {
    state.show_meetups
}
