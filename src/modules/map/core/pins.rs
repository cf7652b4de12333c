// Records the map store reads from its collaborators and the normalized pin it emits.
//
// Purpose
// - Model people markers, user types and the current user's profile.
// - Optional fields stay `Option` so missing data is an explicit "absent", never an error.
// - People records are taken as they come; a record without an id or a type is
//   kept here and dropped by the projections.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A location as handed over by the people and user modules.
///
/// Only its presence matters to the store, so any JSON value is accepted
/// (`{}` and `[]` included) and carried through untouched. `null` reads as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LatLng(Value);

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self(json!({ "lat": lat, "lng": lng }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for LatLng {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A person marker as supplied by the people provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub pin_type: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latlng: Option<LatLng>,
}

impl Pin {
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    pub fn has_any_tag(&self, selected: &[String]) -> bool {
        self.tags().iter().any(|tag| selected.contains(tag))
    }

    pub fn has_type_in(&self, types: &[i64]) -> bool {
        self.pin_type.is_some_and(|pin_type| types.contains(&pin_type))
    }

    /// A pin can be drawn once it carries both an id and a type.
    pub fn is_well_formed(&self) -> bool {
        self.id.is_some() && self.pin_type.is_some()
    }
}

/// Marker options handed to the map widget. Always emitted, currently empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinOptions {}

/// Normalized pin ready for rendering. `key` mirrors `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPin {
    pub id: i64,
    #[serde(rename = "type")]
    pub pin_type: i64,
    pub key: i64,
    pub options: PinOptions,
    pub tags: Vec<String>,
    pub latlng: Option<LatLng>,
}

impl MapPin {
    /// Normalizes a source pin. `None` when the pin has no id or no type.
    pub fn from_pin(pin: &Pin) -> Option<Self> {
        let (id, pin_type) = (pin.id?, pin.pin_type?);
        Some(Self {
            id,
            pin_type,
            key: id,
            options: PinOptions::default(),
            tags: pin.tags().to_vec(),
            latlng: pin.latlng.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserType {
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latlng: Option<LatLng>,
}

impl UserProfile {
    pub fn has_location(&self) -> bool {
        self.latlng.is_some()
    }
}
