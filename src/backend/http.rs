//! JSON-over-HTTP backend.
//!
//! Every call is `POST {endpoint}/api/{canister_id}/{method}` with the JSON
//! encoded argument as body and the caller in the `x-principal` header. The
//! gateway answers with a [`CallResult`] envelope for every method.

use super::{Backend, BackendError, CallResult, DesignId, DesignPreview, Principal, RegisterRequest, User};
use crate::config::BackendConfig;
use crate::design::NewDesign;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

/// Header carrying the caller principal.
pub const PRINCIPAL_HEADER: &str = "x-principal";

/// [`Backend`] implementation talking to a remote gateway.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: Url,
    canister_id: String,
    caller: Principal,
}

impl HttpBackend {
    pub fn new(endpoint: Url, canister_id: impl Into<String>, caller: Principal) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            canister_id: canister_id.into(),
            caller,
        }
    }

    /// Builds a backend from the `[backend]` config section.
    pub fn from_config(config: &BackendConfig, caller: Principal) -> Result<Self, BackendError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|err| {
            BackendError::Transport(format!("invalid endpoint '{}': {}", config.endpoint, err))
        })?;
        Ok(Self::new(endpoint, config.canister_id.clone(), caller))
    }

    /// URL for `method`.
    pub fn method_url(&self, method: &str) -> Result<Url, BackendError> {
        let path = format!("api/{}/{}", self.canister_id, method);
        let mut base = self.endpoint.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        base.join(&path)
            .map_err(|err| BackendError::Transport(format!("invalid method URL: {}", err)))
    }

    async fn call<A, T>(&self, method: &str, args: &A) -> Result<T, BackendError>
    where
        A: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.method_url(method)?;
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(PRINCIPAL_HEADER, self.caller.as_str())
            .json(args)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(BackendError::Transport(format!(
                "{} returned {}: {}",
                method, status, text
            )));
        }

        let envelope: CallResult<T> = response.json().await?;
        envelope.into_result()
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn register(&self, request: RegisterRequest) -> Result<User, BackendError> {
        self.call("register", &request).await
    }

    async fn log_in(&self) -> Result<Option<User>, BackendError> {
        self.call("logIn", &()).await
    }

    async fn create_design(&self, design: NewDesign) -> Result<DesignId, BackendError> {
        self.call("createDesign", &design).await
    }

    async fn get_my_galery(&self) -> Result<Vec<DesignPreview>, BackendError> {
        self.call("getMyGalery", &()).await
    }

    async fn feed(&self) -> Result<Vec<DesignPreview>, BackendError> {
        self.call("feed", &()).await
    }

    async fn who_am_i(&self) -> Result<Principal, BackendError> {
        self.call("whoAmi", &()).await
    }
}
