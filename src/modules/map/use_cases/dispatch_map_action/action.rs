// Actions the UI may dispatch against the map store.
//
// Purpose
// - Express intent ("enter add mode", "the map finished loading") independently
//   of how the resulting state write is performed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "camelCase")]
pub enum MapAction {
    SetAddMode(bool),
    SetMapReady,
    SetShowMeetups(bool),
}
