//! Session context: who is logged in, their profile, and the backend client
//! acting for them.
//!
//! A [`Session`] is a value. It starts anonymous and every transition (login,
//! logout, profile refresh, registration) produces a new session instead of
//! mutating the current one, so a page holding an old session never observes a
//! half-updated identity.

mod identity;
#[cfg(test)]
mod tests;

pub use identity::{Identity, IdentityProviders, MAX_TIME_TO_LIVE};

use crate::backend::{BackendClient, BackendError, BackendFactory, User};
use crate::config::Config;
use std::sync::Arc;
use std::time::Duration;

/// Runtime options derived from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub timeout: Duration,
    pub providers: IdentityProviders,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            timeout: crate::backend::DEFAULT_TIMEOUT,
            providers: IdentityProviders::default(),
        }
    }
}

impl SessionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            timeout: Duration::from_secs(config.backend.timeout_secs),
            providers: IdentityProviders::for_network(config.backend.network),
        }
    }
}

/// Immutable session state.
#[derive(Clone)]
pub struct Session {
    identity: Identity,
    user: Option<User>,
    client: BackendClient,
    factory: Arc<dyn BackendFactory>,
    settings: SessionSettings,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("identity", &self.identity)
            .field("user", &self.user.as_ref().map(|u| u.name.as_str()))
            .field("client", &self.client)
            .finish()
    }
}

impl Session {
    /// The session every app run starts with.
    pub fn anonymous(
        factory: Arc<dyn BackendFactory>,
        settings: SessionSettings,
    ) -> Result<Self, BackendError> {
        Self::connect(Identity::Anonymous, factory, settings)
    }

    fn connect(
        identity: Identity,
        factory: Arc<dyn BackendFactory>,
        settings: SessionSettings,
    ) -> Result<Self, BackendError> {
        let backend = factory.connect(&identity)?;
        let client = BackendClient::new(backend, settings.timeout);
        log::debug!("Connected backend as {}", identity.principal());
        Ok(Self {
            identity,
            user: None,
            client,
            factory,
            settings,
        })
    }

    /// Replaces the identity. The new session has no profile until
    /// [`refresh_user`](Self::refresh_user) runs.
    pub fn login(self, identity: Identity) -> Result<Self, BackendError> {
        log::info!("Logging in as {}", identity.principal());
        self.client.scope().cancel();
        Self::connect(identity, self.factory, self.settings)
    }

    pub fn logout(self) -> Result<Self, BackendError> {
        log::info!("Logging out");
        self.client.scope().cancel();
        Self::connect(Identity::Anonymous, self.factory, self.settings)
    }

    /// Probes `log_in` and returns a session carrying the profile, if any.
    ///
    /// A failed probe is logged and leaves the session without a profile.
    pub async fn refresh_user(self) -> Self {
        let user = match self.client.log_in().await {
            Ok(user) => user,
            Err(err) => {
                log::warn!("Could not load profile: {}", err);
                None
            }
        };
        Self { user, ..self }
    }

    /// Session after a successful registration.
    pub fn with_user(self, user: User) -> Self {
        Self {
            user: Some(user),
            ..self
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn client(&self) -> &BackendClient {
        &self.client
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_authenticated()
    }

    /// Authenticated but no profile yet.
    pub fn needs_registration(&self) -> bool {
        self.is_authenticated() && self.user.is_none()
    }
}
