use crate::modules::map::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::map::adapters::outbound::map_store::MapStore;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<MapStore>>,
    pub directory: Arc<InMemoryDirectory>,
}

impl AppState {
    pub fn new(directory: InMemoryDirectory) -> Self {
        Self {
            store: Arc::new(RwLock::new(MapStore::new())),
            directory: Arc::new(directory),
        }
    }
}
