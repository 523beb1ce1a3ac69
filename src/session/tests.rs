use super::*;
use crate::backend::{MemoryBackendFactory, Principal, RegisterRequest};

fn factory() -> Arc<MemoryBackendFactory> {
    Arc::new(MemoryBackendFactory::default())
}

fn amara() -> Identity {
    Identity::authenticated(Principal::new("amara"), "https://identity.ic0.app")
}

#[tokio::test]
async fn starts_anonymous_without_user() {
    let session = Session::anonymous(factory(), SessionSettings::default()).unwrap();
    assert!(!session.is_authenticated());
    assert!(!session.needs_registration());
    assert!(session.user().is_none());
    assert!(session.client().who_am_i().await.unwrap().is_anonymous());
}

#[tokio::test]
async fn login_replaces_client_and_requires_registration() {
    let session = Session::anonymous(factory(), SessionSettings::default()).unwrap();
    let old_scope = session.client().scope().clone();

    let session = session.login(amara()).unwrap().refresh_user().await;
    assert!(old_scope.is_cancelled());
    assert!(session.is_authenticated());
    assert!(session.needs_registration());
    assert_eq!(session.client().who_am_i().await.unwrap(), Principal::new("amara"));
}

#[tokio::test]
async fn refresh_user_picks_up_existing_profile() {
    let factory = factory();
    let session = Session::anonymous(factory.clone(), SessionSettings::default())
        .unwrap()
        .login(amara())
        .unwrap();
    let user = session
        .client()
        .register(RegisterRequest {
            name: "Amara".into(),
            email: None,
            avatar: None,
        })
        .await
        .unwrap();

    let registered = session.clone().with_user(user.clone());
    assert!(!registered.needs_registration());
    // The earlier value is untouched.
    assert!(session.user().is_none());

    let fresh = Session::anonymous(factory, SessionSettings::default())
        .unwrap()
        .login(amara())
        .unwrap()
        .refresh_user()
        .await;
    assert_eq!(fresh.user(), Some(&user));
}

#[tokio::test]
async fn logout_drops_user_and_identity() {
    let session = Session::anonymous(factory(), SessionSettings::default())
        .unwrap()
        .login(amara())
        .unwrap();
    let session = session.logout().unwrap();
    assert_eq!(session.identity(), &Identity::Anonymous);
    assert!(session.user().is_none());
}

#[test]
fn settings_follow_config() {
    let mut config = Config::default();
    config.backend.timeout_secs = 5;
    config.backend.network = crate::config::NetworkKind::Local;

    let settings = SessionSettings::from_config(&config);
    assert_eq!(settings.timeout, Duration::from_secs(5));
    assert!(settings.providers.internet_identity.contains("localhost"));
}
