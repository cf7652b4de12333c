use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::map::use_cases::dispatch_map_action::inbound::http as dispatch_http;
use crate::modules::map::use_cases::list_map_pins::inbound::http as pins_http;
use crate::modules::map::use_cases::read_map_flags::inbound::http as flags_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/map/state", get(flags_http::handle))
        .route("/map/add-mode", post(dispatch_http::set_add_mode))
        .route("/map/ready", post(dispatch_http::set_map_ready))
        .route("/map/show-meetups", post(dispatch_http::set_show_meetups))
        .route("/map/dispatch", post(dispatch_http::dispatch))
        .route("/map/commit", post(dispatch_http::commit))
        .route("/map/pins", get(pins_http::pins))
        .route("/map/filtered-pins", get(pins_http::filtered_pins))
        .route("/map/shown-pins", get(pins_http::shown_pins))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
