use serde::{Deserialize, Serialize};

/// UI flags owned by the map store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapUiState {
    pub add_mode: bool,
    pub map_ready: bool,
    pub show_meetups: bool,
}

/// Fresh state for a new store. Every call hands out its own value.
pub fn initial_state() -> MapUiState {
    MapUiState::default()
}
