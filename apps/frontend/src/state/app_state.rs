use std::sync::Arc;

use crate::client::ScoutBackend;
use crate::services::drafts::DraftStore;

/// Application state containing shared resources.
///
/// There is no database and no session store here: all state of record
/// lives in the remote scouting backend, reached through the seam. The
/// draft store holds per-scout form drafts only.
#[derive(Clone)]
pub struct AppState {
    /// The remote scouting service.
    pub backend: Arc<dyn ScoutBackend>,
    /// Session-scoped scouting drafts.
    pub drafts: DraftStore,
}

impl AppState {
    pub fn new(backend: Arc<dyn ScoutBackend>) -> Self {
        Self {
            backend,
            drafts: DraftStore::new(),
        }
    }
}
