// Named state transitions of the map store.
//
// Purpose
// - Give every write to `MapUiState` a stable name and a payload so actions can
//   request it through a commit channel without touching the state directly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SET_ADD_MODE: &str = "SET_ADD_MODE";
pub const SET_MAP_READY: &str = "SET_MAP_READY";
pub const SET_SHOW_MEETUPS: &str = "SET_SHOW_MEETUPS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MutationError {
    #[error("unknown mutation: {0}")]
    UnknownMutation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mutation", content = "value")]
pub enum MapMutation {
    #[serde(rename = "SET_ADD_MODE")]
    SetAddMode(bool),
    #[serde(rename = "SET_MAP_READY")]
    SetMapReady(bool),
    #[serde(rename = "SET_SHOW_MEETUPS")]
    SetShowMeetups(bool),
}

impl MapMutation {
    pub fn name(&self) -> &'static str {
        match self {
            MapMutation::SetAddMode(_) => SET_ADD_MODE,
            MapMutation::SetMapReady(_) => SET_MAP_READY,
            MapMutation::SetShowMeetups(_) => SET_SHOW_MEETUPS,
        }
    }

    pub fn value(&self) -> bool {
        match *self {
            MapMutation::SetAddMode(value)
            | MapMutation::SetMapReady(value)
            | MapMutation::SetShowMeetups(value) => value,
        }
    }

    pub fn from_name(name: &str, value: bool) -> Result<Self, MutationError> {
        match name {
            SET_ADD_MODE => Ok(MapMutation::SetAddMode(value)),
            SET_MAP_READY => Ok(MapMutation::SetMapReady(value)),
            SET_SHOW_MEETUPS => Ok(MapMutation::SetShowMeetups(value)),
            other => Err(MutationError::UnknownMutation(other.to_string())),
        }
    }
}
