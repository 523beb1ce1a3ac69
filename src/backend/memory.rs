//! In-process backend used by tests, the CLI, and offline runs.

use super::{Backend, BackendError, DesignId, DesignPreview, Principal, RegisterRequest, User};
use crate::design::NewDesign;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct StoreState {
    users: BTreeMap<Principal, User>,
    designs: Vec<DesignPreview>,
    next_id: DesignId,
}

/// Shared state behind every [`MemoryBackend`] handle.
///
/// Cloning the store shares it, so backends connected for different callers
/// see each other's designs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a backend that makes calls as `caller`.
    pub fn connect(&self, caller: Principal) -> MemoryBackend {
        MemoryBackend {
            store: self.clone(),
            caller,
        }
    }

    /// Number of stored designs across all users.
    pub async fn design_count(&self) -> usize {
        self.state.lock().await.designs.len()
    }
}

/// [`Backend`] implementation over a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    store: MemoryStore,
    caller: Principal,
}

impl MemoryBackend {
    /// Standalone backend with its own empty store.
    pub fn new(caller: Principal) -> Self {
        MemoryStore::new().connect(caller)
    }

    pub fn caller(&self) -> &Principal {
        &self.caller
    }

    fn require_authenticated(&self, action: &str) -> Result<(), BackendError> {
        if self.caller.is_anonymous() {
            Err(BackendError::Rejected(format!(
                "anonymous callers cannot {}",
                action
            )))
        } else {
            Ok(())
        }
    }
}

fn now_nanos() -> i64 {
    chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn register(&self, request: RegisterRequest) -> Result<User, BackendError> {
        self.require_authenticated("register")?;
        let mut state = self.store.state.lock().await;
        if state.users.contains_key(&self.caller) {
            return Err(BackendError::Rejected("user already registered".to_string()));
        }

        let user = User {
            id: self.caller.clone(),
            name: request.name,
            email: request.email,
            bio: None,
            avatar: request.avatar,
            register_date: now_nanos(),
            designs: Vec::new(),
            followers: Vec::new(),
            following: Vec::new(),
        };
        state.users.insert(self.caller.clone(), user.clone());
        log::info!("Registered user '{}' for {}", user.name, self.caller);
        Ok(user)
    }

    async fn log_in(&self) -> Result<Option<User>, BackendError> {
        Ok(self.store.state.lock().await.users.get(&self.caller).cloned())
    }

    async fn create_design(&self, design: NewDesign) -> Result<DesignId, BackendError> {
        self.require_authenticated("create designs")?;
        let mut state = self.store.state.lock().await;
        if !state.users.contains_key(&self.caller) {
            return Err(BackendError::Rejected("user is not registered".to_string()));
        }

        state.next_id += 1;
        let id = state.next_id;
        state.designs.push(DesignPreview {
            id,
            owner: self.caller.clone(),
            name: design.name,
            description: design.description,
            kind: design.kind,
            cover_image: design.cover_image,
            date_creation: now_nanos(),
            visible_3d_rendering: design.visible_3d_rendering,
            source_files: design.source_files,
        });
        if let Some(user) = state.users.get_mut(&self.caller) {
            user.designs.push(id);
        }
        log::debug!("Stored design {} for {}", id, self.caller);
        Ok(id)
    }

    async fn get_my_galery(&self) -> Result<Vec<DesignPreview>, BackendError> {
        let state = self.store.state.lock().await;
        Ok(state
            .designs
            .iter()
            .filter(|design| design.owner == self.caller)
            .cloned()
            .collect())
    }

    async fn feed(&self) -> Result<Vec<DesignPreview>, BackendError> {
        let state = self.store.state.lock().await;
        Ok(state
            .designs
            .iter()
            .filter(|design| design.visible_3d_rendering)
            .cloned()
            .collect())
    }

    async fn who_am_i(&self) -> Result<Principal, BackendError> {
        Ok(self.caller.clone())
    }
}
