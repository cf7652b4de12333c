use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::modules::map::core::pins::{MapPin, Pin};
use crate::modules::map::use_cases::list_map_pins::handler::MapQueries;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct FilteredPinsParams {
    pub focus_on: Option<i64>,
}

pub async fn pins(State(state): State<AppState>) -> Json<Vec<Pin>> {
    let directory = &*state.directory;
    Json(MapQueries::new(directory, directory, directory).pins())
}

pub async fn filtered_pins(
    State(state): State<AppState>,
    Query(params): Query<FilteredPinsParams>,
) -> Json<Vec<MapPin>> {
    let directory = &*state.directory;
    Json(MapQueries::new(directory, directory, directory).filtered_pins(params.focus_on))
}

pub async fn shown_pins(State(state): State<AppState>) -> Json<BTreeMap<i64, usize>> {
    let directory = &*state.directory;
    Json(MapQueries::new(directory, directory, directory).shown_pins())
}
