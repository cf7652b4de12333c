// Ports describe the state the map store reads from sibling modules.
//
// Purpose
// - Replace lookups by string key with one typed trait per collaborator.
//
// Boundaries
// - Read only. The map store never writes through these traits.
// - Adapters implement them; tests use the in memory directory.

use crate::modules::map::core::pins::{Pin, UserProfile, UserType};

pub trait PeopleProvider {
    fn list(&self) -> Vec<Pin>;
    fn selected_tags(&self) -> Vec<String>;
}

pub trait UserTypeProvider {
    fn user_types(&self) -> Vec<UserType>;
    fn selected_user_types(&self) -> Vec<i64>;
}

pub trait UserProvider {
    /// `None` when nobody is signed in.
    fn user_profile(&self) -> Option<UserProfile>;
}
