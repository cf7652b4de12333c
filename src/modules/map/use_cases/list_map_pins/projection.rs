// Derived views over the people list.
//
// Purpose
// - Select the pins worth drawing, filter them by the user's selections and
//   count how many markers each user type contributes.
//
// Responsibilities
// - Stay pure: borrow the inputs, return fresh values, never cache.
// - Skip records without an id or a type instead of failing.

use std::collections::BTreeMap;

use crate::modules::map::core::pins::{MapPin, Pin, UserProfile, UserType};

/// People of this type are drawn as pins.
pub const PIN_WORTHY_TYPE: i64 = 2;

pub fn get_pins(people: &[Pin]) -> Vec<Pin> {
    people
        .iter()
        .filter(|person| person.is_well_formed() && person.pin_type == Some(PIN_WORTHY_TYPE))
        .cloned()
        .collect()
}

/// `focus_on` is accepted for callers that track a focused pin; it does not
/// change which pins pass.
pub fn get_filtered_pins(
    pins: &[Pin],
    _focus_on: Option<i64>,
    selected_user_types: &[i64],
    selected_tags: &[String],
) -> Vec<MapPin> {
    pins.iter()
        .filter(|pin| pin.has_type_in(selected_user_types))
        .filter(|pin| selected_tags.is_empty() || pin.has_any_tag(selected_tags))
        .filter_map(MapPin::from_pin)
        .collect()
}

pub fn get_shown_pins(
    pins: Option<&[Pin]>,
    user_types: &[UserType],
    profile: Option<&UserProfile>,
) -> BTreeMap<i64, usize> {
    let mut shown: BTreeMap<i64, usize> = user_types.iter().map(|t| (t.id, 0)).collect();

    for pin_type in pins.unwrap_or_default().iter().filter_map(|pin| pin.pin_type) {
        if let Some(count) = shown.get_mut(&pin_type) {
            *count += 1;
        }
    }

    if let Some(profile) = profile
        && profile.has_location()
        && let Some(user_type) = profile.user_type
        && let Some(count) = shown.get_mut(&user_type)
    {
        *count += 1;
    }

    shown
}
