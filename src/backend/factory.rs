use super::{Backend, BackendError, HttpBackend, MemoryStore};
use crate::config::BackendConfig;
use crate::session::Identity;
use std::sync::Arc;

/// Connects a backend for a caller identity.
///
/// Sessions call this on every login and logout so the backend always acts as
/// the current identity.
pub trait BackendFactory: Send + Sync {
    fn connect(&self, identity: &Identity) -> Result<Arc<dyn Backend>, BackendError>;
}

/// Connects [`MemoryBackend`](super::MemoryBackend)s that share one store.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackendFactory {
    store: MemoryStore,
}

impl MemoryBackendFactory {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}

impl BackendFactory for MemoryBackendFactory {
    fn connect(&self, identity: &Identity) -> Result<Arc<dyn Backend>, BackendError> {
        Ok(Arc::new(self.store.connect(identity.principal())))
    }
}

/// Connects [`HttpBackend`]s using the `[backend]` config section.
#[derive(Debug, Clone)]
pub struct HttpBackendFactory {
    config: BackendConfig,
}

impl HttpBackendFactory {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }
}

impl BackendFactory for HttpBackendFactory {
    fn connect(&self, identity: &Identity) -> Result<Arc<dyn Backend>, BackendError> {
        let backend = HttpBackend::from_config(&self.config, identity.principal())?;
        Ok(Arc::new(backend))
    }
}
