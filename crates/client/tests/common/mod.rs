use std::sync::Arc;

use orgdesk_client::session::SessionStore;
use orgdesk_client::storage::MemoryStorage;

/// A session store over ephemeral in-memory storage.
pub fn test_session() -> Arc<SessionStore> {
    Arc::new(SessionStore::new(Box::new(MemoryStorage::new())))
}
