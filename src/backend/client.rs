use super::{Backend, BackendError, DesignId, DesignPreview, Principal, RegisterRequest, User};
use crate::design::NewDesign;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Default per-call timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Cancellation token shared by every call issued for one page.
///
/// Cancelling is one-way: once cancelled, every pending and future call made
/// under the scope resolves to [`BackendError::Cancelled`].
#[derive(Debug, Clone)]
pub struct CancelScope {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for CancelScope {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelScope {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once [`cancel`](Self::cancel) has been called.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

/// Backend handle used by pages: per-call timeout plus page-scoped cancellation.
///
/// There is no retry; a failed call is reported once and the caller decides
/// what to show.
#[derive(Clone)]
pub struct BackendClient {
    backend: Arc<dyn Backend>,
    timeout: Duration,
    scope: CancelScope,
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("timeout", &self.timeout)
            .field("cancelled", &self.scope.is_cancelled())
            .finish()
    }
}

impl BackendClient {
    pub fn new(backend: Arc<dyn Backend>, timeout: Duration) -> Self {
        Self {
            backend,
            timeout,
            scope: CancelScope::new(),
        }
    }

    /// Same backend and timeout, calls bound to `scope`.
    pub fn with_scope(&self, scope: CancelScope) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            timeout: self.timeout,
            scope,
        }
    }

    pub fn scope(&self) -> &CancelScope {
        &self.scope
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<User, BackendError> {
        self.run("register", self.backend.register(request)).await
    }

    pub async fn log_in(&self) -> Result<Option<User>, BackendError> {
        self.run("logIn", self.backend.log_in()).await
    }

    pub async fn create_design(&self, design: NewDesign) -> Result<DesignId, BackendError> {
        self.run("createDesign", self.backend.create_design(design)).await
    }

    pub async fn get_my_galery(&self) -> Result<Vec<DesignPreview>, BackendError> {
        self.run("getMyGalery", self.backend.get_my_galery()).await
    }

    pub async fn feed(&self) -> Result<Vec<DesignPreview>, BackendError> {
        self.run("feed", self.backend.feed()).await
    }

    pub async fn who_am_i(&self) -> Result<Principal, BackendError> {
        self.run("whoAmi", self.backend.who_am_i()).await
    }

    async fn run<T, F>(&self, method: &'static str, call: F) -> Result<T, BackendError>
    where
        F: Future<Output = Result<T, BackendError>>,
    {
        if self.scope.is_cancelled() {
            log::debug!("Skipping {}: scope already cancelled", method);
            return Err(BackendError::Cancelled(method));
        }

        log::debug!("Calling backend method {}", method);
        let result = tokio::select! {
            _ = self.scope.cancelled() => Err(BackendError::Cancelled(method)),
            outcome = tokio::time::timeout(self.timeout, call) => match outcome {
                Ok(result) => result,
                Err(_) => Err(BackendError::Timeout {
                    method,
                    timeout: self.timeout,
                }),
            },
        };

        match &result {
            Err(BackendError::Cancelled(_)) => log::debug!("Backend call {} cancelled", method),
            Err(err) => log::error!("Backend call {} failed: {}", method, err),
            Ok(_) => {}
        }
        result
    }
}
