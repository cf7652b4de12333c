// Shared rstest fixture: a directory seeded with a small, known population.
//
// - person 1: type 1, located
// - person 2: type 2, tagged "vuex", located
// - person 3: type 2, tagged "rust"
// - user types 1 and 2 declared, type 2 selected, no tags selected
// - current user: type 2, no location

use rstest::fixture;

use crate::modules::map::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::map::core::pins::{UserProfile, UserType};
use crate::tests::fixtures::pins::PinBuilder;

#[fixture]
pub fn seeded_directory() -> InMemoryDirectory {
    InMemoryDirectory {
        people: vec![
            PinBuilder::new(1, 1).latlng(52.09, 5.12).build(),
            PinBuilder::new(2, 2).tags(&["vuex"]).latlng(51.92, 4.48).build(),
            PinBuilder::new(3, 2).tags(&["rust"]).build(),
        ],
        selected_tags: vec![],
        user_types: vec![UserType { id: 1 }, UserType { id: 2 }],
        selected_user_types: vec![2],
        user_profile: Some(UserProfile {
            user_type: Some(2),
            latlng: None,
        }),
    }
}
