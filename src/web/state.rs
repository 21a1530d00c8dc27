use crate::services::storage::StorageResolver;
use crate::{Config, Database};

pub struct AppState {
    pub config: Config,
    pub db: Database,
    /// Resolved once at startup and injected here; never re-probed.
    pub storage: StorageResolver,
    pub production_mode: bool,
}

impl AppState {
    pub fn new(config: Config, db: Database, production_mode: bool) -> Self {
        let storage = StorageResolver::locate(&config.storage);
        Self {
            config,
            db,
            storage,
            production_mode,
        }
    }

    /// State with a pre-resolved storage root, for tests and callers that
    /// probe elsewhere.
    pub fn with_storage(
        config: Config,
        db: Database,
        storage: StorageResolver,
        production_mode: bool,
    ) -> Self {
        Self {
            config,
            db,
            storage,
            production_mode,
        }
    }
}
