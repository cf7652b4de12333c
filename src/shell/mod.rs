// Composition root for the map store.
//
// Responsibilities
// - Read config from environment.
// - Load the collaborator snapshot and create the store.
// - Wire both into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
