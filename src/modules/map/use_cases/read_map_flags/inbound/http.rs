use axum::{Json, extract::State};

use crate::modules::map::core::state::MapUiState;
use crate::modules::map::use_cases::read_map_flags::getters::{
    get_map_ready, get_show_meetups, is_add_mode,
};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Json<MapUiState> {
    let store = state.store.read().await;
    let map = store.state();
    Json(MapUiState {
        add_mode: is_add_mode(map),
        map_ready: get_map_ready(map),
        show_meetups: get_show_meetups(map),
    })
}
