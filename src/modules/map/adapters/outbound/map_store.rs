// Store that owns the map UI state and applies committed mutations.
//
// Responsibilities
// - Be the single writer of `MapUiState`.
// - Apply commits synchronously so a getter evaluated afterwards sees the change.

use crate::modules::map::core::evolve::evolve;
use crate::modules::map::core::mutations::{MapMutation, MutationError};
use crate::modules::map::core::state::{MapUiState, initial_state};
use crate::shared::infrastructure::commit_channel::CommitChannel;

#[derive(Debug, Clone)]
pub struct MapStore {
    state: MapUiState,
}

impl Default for MapStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MapStore {
    pub fn new() -> Self {
        Self {
            state: initial_state(),
        }
    }

    pub fn state(&self) -> &MapUiState {
        &self.state
    }

    /// Commits a mutation addressed by its name, e.g. `SET_ADD_MODE`.
    pub fn commit_named(&mut self, name: &str, value: bool) -> Result<(), MutationError> {
        let mutation = MapMutation::from_name(name, value)?;
        self.commit(mutation);
        Ok(())
    }
}

impl CommitChannel<MapMutation> for MapStore {
    fn commit(&mut self, mutation: MapMutation) {
        tracing::debug!(
            mutation = mutation.name(),
            value = mutation.value(),
            "committing map mutation"
        );
        self.state = evolve(self.state, mutation);
    }
}
