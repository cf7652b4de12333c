// Query handler that feeds the collaborator ports into the pin projections.
//
// Purpose
// - Chain the derived views the way the store does: the filtered pins and the
//   per-type counts are both computed from `pins()`, never from the raw list.

use std::collections::BTreeMap;

use crate::modules::map::core::pins::{MapPin, Pin};
use crate::modules::map::core::ports::{PeopleProvider, UserProvider, UserTypeProvider};
use crate::modules::map::use_cases::list_map_pins::projection::{
    get_filtered_pins, get_pins, get_shown_pins,
};

pub struct MapQueries<'a, TPeople, TUserTypes, TUser>
where
    TPeople: PeopleProvider,
    TUserTypes: UserTypeProvider,
    TUser: UserProvider,
{
    people: &'a TPeople,
    user_types: &'a TUserTypes,
    user: &'a TUser,
}

impl<'a, TPeople, TUserTypes, TUser> MapQueries<'a, TPeople, TUserTypes, TUser>
where
    TPeople: PeopleProvider,
    TUserTypes: UserTypeProvider,
    TUser: UserProvider,
{
    pub fn new(people: &'a TPeople, user_types: &'a TUserTypes, user: &'a TUser) -> Self {
        Self {
            people,
            user_types,
            user,
        }
    }

    pub fn pins(&self) -> Vec<Pin> {
        get_pins(&self.people.list())
    }

    pub fn filtered_pins(&self, focus_on: Option<i64>) -> Vec<MapPin> {
        let filtered = get_filtered_pins(
            &self.pins(),
            focus_on,
            &self.user_types.selected_user_types(),
            &self.people.selected_tags(),
        );
        tracing::debug!(count = filtered.len(), "filtered pins computed");
        filtered
    }

    pub fn shown_pins(&self) -> BTreeMap<i64, usize> {
        let pins = self.pins();
        get_shown_pins(
            Some(pins.as_slice()),
            &self.user_types.user_types(),
            self.user.user_profile().as_ref(),
        )
    }
}

#[cfg(test)]
mod list_map_pins_handler_tests {
    use super::*;
    use crate::modules::map::adapters::outbound::directory_in_memory::InMemoryDirectory;
    use crate::modules::map::core::pins::LatLng;
    use crate::tests::fixtures::directory::seeded_directory;
    use rstest::rstest;

    #[rstest]
    fn it_should_list_only_pin_worthy_people(seeded_directory: InMemoryDirectory) {
        let queries = MapQueries::new(&seeded_directory, &seeded_directory, &seeded_directory);
        let pins = queries.pins();
        assert!(!pins.is_empty());
        assert!(pins.iter().all(|p| p.pin_type == Some(2)));
    }

    #[rstest]
    fn it_should_filter_by_the_selected_user_types(mut seeded_directory: InMemoryDirectory) {
        seeded_directory.selected_user_types = vec![];
        let queries = MapQueries::new(&seeded_directory, &seeded_directory, &seeded_directory);
        assert!(queries.filtered_pins(None).is_empty());
    }

    #[rstest]
    fn it_should_filter_by_the_selected_tags(mut seeded_directory: InMemoryDirectory) {
        seeded_directory.selected_user_types = vec![1, 2];
        seeded_directory.selected_tags = vec!["rust".to_string()];
        let queries = MapQueries::new(&seeded_directory, &seeded_directory, &seeded_directory);
        let filtered = queries.filtered_pins(Some(3));
        assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);
        assert_eq!(filtered[0].key, 3);
    }

    #[rstest]
    fn it_should_see_changes_to_the_collaborators_on_the_next_call(
        mut seeded_directory: InMemoryDirectory,
    ) {
        let before = MapQueries::new(&seeded_directory, &seeded_directory, &seeded_directory)
            .filtered_pins(None)
            .len();
        seeded_directory.selected_tags = vec!["nothing-matches".to_string()];
        let after = MapQueries::new(&seeded_directory, &seeded_directory, &seeded_directory)
            .filtered_pins(None)
            .len();
        assert!(before > 0);
        assert_eq!(after, 0);
    }

    #[rstest]
    fn it_should_count_shown_pins_from_the_pin_list(mut seeded_directory: InMemoryDirectory) {
        seeded_directory.user_profile = None;
        let queries = MapQueries::new(&seeded_directory, &seeded_directory, &seeded_directory);
        assert_eq!(queries.shown_pins(), BTreeMap::from([(1, 0), (2, 2)]));
    }

    #[rstest]
    fn it_should_count_the_located_user(mut seeded_directory: InMemoryDirectory) {
        if let Some(profile) = seeded_directory.user_profile.as_mut() {
            profile.user_type = Some(1);
            profile.latlng = Some(LatLng::new(1.0, 1.0));
        }
        let queries = MapQueries::new(&seeded_directory, &seeded_directory, &seeded_directory);
        assert_eq!(queries.shown_pins(), BTreeMap::from([(1, 1), (2, 2)]));
    }
}
