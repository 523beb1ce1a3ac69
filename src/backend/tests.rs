use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::time::{Duration, sleep};

use super::{
    Backend, BackendClient, BackendError, BackendFactory, CancelScope, DesignId, DesignPreview,
    MemoryBackend, MemoryBackendFactory, MemoryStore, Principal, RegisterRequest, User,
};
use crate::design::{DesignKind, FileAsset, NewDesign};
use crate::session::Identity;

/// Backend whose calls sleep for `delay` and then fail or succeed on demand.
#[derive(Clone)]
struct MockBackend {
    delay: Duration,
    error: Arc<Mutex<Option<BackendError>>>,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl MockBackend {
    fn new(delay: Duration) -> Self {
        Self {
            delay,
            error: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(error: BackendError) -> Self {
        let mock = Self::new(Duration::ZERO);
        *mock.error.lock().unwrap() = Some(error);
        mock
    }

    async fn respond<T>(&self, method: &'static str, value: T) -> Result<T, BackendError> {
        self.calls.lock().unwrap().push(method);
        sleep(self.delay).await;
        let pending = self.error.lock().unwrap().take();
        match pending {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn register(&self, request: RegisterRequest) -> Result<User, BackendError> {
        let user = User {
            id: Principal::new("mock"),
            name: request.name,
            email: request.email,
            bio: None,
            avatar: None,
            register_date: 0,
            designs: vec![],
            followers: vec![],
            following: vec![],
        };
        self.respond("register", user).await
    }

    async fn log_in(&self) -> Result<Option<User>, BackendError> {
        self.respond("logIn", None).await
    }

    async fn create_design(&self, _design: NewDesign) -> Result<DesignId, BackendError> {
        self.respond("createDesign", 42).await
    }

    async fn get_my_galery(&self) -> Result<Vec<DesignPreview>, BackendError> {
        self.respond("getMyGalery", vec![]).await
    }

    async fn feed(&self) -> Result<Vec<DesignPreview>, BackendError> {
        self.respond("feed", vec![]).await
    }

    async fn who_am_i(&self) -> Result<Principal, BackendError> {
        self.respond("whoAmi", Principal::new("mock")).await
    }
}

fn sample_design(name: &str, visible: bool) -> NewDesign {
    NewDesign {
        name: name.to_string(),
        description: "stripes".to_string(),
        kind: DesignKind::Clothing,
        visible_3d_rendering: visible,
        source_files: vec![],
        cover_image: FileAsset::empty(),
    }
}

fn register_request(name: &str) -> RegisterRequest {
    RegisterRequest {
        name: name.to_string(),
        email: None,
        avatar: None,
    }
}

#[tokio::test]
async fn test_client_passes_results_through() {
    let mock = MockBackend::new(Duration::ZERO);
    let client = BackendClient::new(Arc::new(mock.clone()), Duration::from_secs(1));

    assert_eq!(client.create_design(sample_design("a", false)).await.unwrap(), 42);
    assert_eq!(client.who_am_i().await.unwrap(), Principal::new("mock"));
    assert_eq!(*mock.calls.lock().unwrap(), vec!["createDesign", "whoAmi"]);
}

#[tokio::test]
async fn test_client_times_out_slow_calls() {
    let mock = MockBackend::new(Duration::from_secs(5));
    let client = BackendClient::new(Arc::new(mock), Duration::from_millis(20));

    let err = client.feed().await.unwrap_err();
    assert!(matches!(err, BackendError::Timeout { method: "feed", .. }));
}

#[tokio::test]
async fn test_client_reports_rejections() {
    let mock = MockBackend::failing(BackendError::Rejected("nope".into()));
    let client = BackendClient::new(Arc::new(mock), Duration::from_secs(1));

    assert!(matches!(
        client.log_in().await,
        Err(BackendError::Rejected(msg)) if msg == "nope"
    ));
}

#[tokio::test]
async fn test_cancel_scope_aborts_in_flight_call() {
    let mock = MockBackend::new(Duration::from_secs(5));
    let scope = CancelScope::new();
    let client = BackendClient::new(Arc::new(mock), Duration::from_secs(10)).with_scope(scope.clone());

    let pending = tokio::spawn(async move { client.get_my_galery().await });
    sleep(Duration::from_millis(20)).await;
    scope.cancel();

    let result = pending.await.unwrap();
    assert!(matches!(result, Err(BackendError::Cancelled("getMyGalery"))));
}

#[tokio::test]
async fn test_cancelled_scope_rejects_new_calls_without_calling_backend() {
    let mock = MockBackend::new(Duration::ZERO);
    let scope = CancelScope::new();
    scope.cancel();
    let client = BackendClient::new(Arc::new(mock.clone()), Duration::from_secs(1)).with_scope(scope);

    assert!(matches!(client.feed().await, Err(BackendError::Cancelled("feed"))));
    assert!(mock.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_fresh_scope_is_independent() {
    let mock = MockBackend::new(Duration::ZERO);
    let client = BackendClient::new(Arc::new(mock), Duration::from_secs(1));
    client.scope().cancel();

    let next = client.with_scope(CancelScope::new());
    assert!(next.feed().await.is_ok());
}

#[tokio::test]
async fn test_memory_backend_register_and_log_in() {
    let backend = MemoryBackend::new(Principal::new("amara"));
    assert_eq!(backend.log_in().await.unwrap(), None);

    let user = backend.register(register_request("Amara")).await.unwrap();
    assert_eq!(user.id, Principal::new("amara"));
    assert!(user.register_date > 0);

    let logged = backend.log_in().await.unwrap().unwrap();
    assert_eq!(logged.name, "Amara");

    let again = backend.register(register_request("Amara")).await;
    assert!(matches!(again, Err(BackendError::Rejected(_))));
}

#[tokio::test]
async fn test_memory_backend_rejects_anonymous_writes() {
    let backend = MemoryBackend::new(Principal::anonymous());
    assert!(matches!(
        backend.register(register_request("Ghost")).await,
        Err(BackendError::Rejected(_))
    ));
    assert!(matches!(
        backend.create_design(sample_design("x", true)).await,
        Err(BackendError::Rejected(_))
    ));
}

#[tokio::test]
async fn test_memory_backend_requires_registration_for_designs() {
    let backend = MemoryBackend::new(Principal::new("amara"));
    assert!(matches!(
        backend.create_design(sample_design("x", true)).await,
        Err(BackendError::Rejected(_))
    ));
}

#[tokio::test]
async fn test_memory_backend_galleries_and_feed() {
    let store = MemoryStore::new();
    let amara = store.connect(Principal::new("amara"));
    let bo = store.connect(Principal::new("bo"));
    amara.register(register_request("Amara")).await.unwrap();
    bo.register(register_request("Bo")).await.unwrap();

    let first = amara.create_design(sample_design("Ikat", true)).await.unwrap();
    let second = amara.create_design(sample_design("Draft", false)).await.unwrap();
    let third = bo.create_design(sample_design("Batik", true)).await.unwrap();
    assert_eq!((first, second, third), (1, 2, 3));

    let mine: Vec<_> = amara.get_my_galery().await.unwrap().into_iter().map(|d| d.id).collect();
    assert_eq!(mine, vec![1, 2]);

    let feed: Vec<_> = bo.feed().await.unwrap().into_iter().map(|d| d.name).collect();
    assert_eq!(feed, vec!["Ikat", "Batik"]);

    let profile = amara.log_in().await.unwrap().unwrap();
    assert_eq!(profile.designs, vec![1, 2]);
    assert_eq!(store.design_count().await, 3);
}

#[tokio::test]
async fn test_memory_factory_shares_store_across_identities() {
    let factory = MemoryBackendFactory::default();
    let identity = Identity::authenticated(Principal::new("amara"), "https://identity.ic0.app");

    let backend = factory.connect(&identity).unwrap();
    backend.register(register_request("Amara")).await.unwrap();
    backend.create_design(sample_design("Ikat", true)).await.unwrap();

    let anonymous = factory.connect(&Identity::Anonymous).unwrap();
    assert_eq!(anonymous.who_am_i().await.unwrap(), Principal::anonymous());
    assert_eq!(anonymous.feed().await.unwrap().len(), 1);
}
