use crate::backend::Principal;
use crate::config::NetworkKind;
use std::time::Duration;

const LOCAL_INTERNET_IDENTITY: &str = "http://localhost:4943/?canisterId=rdmx6-jaaaa-aaaaa-aaadq-cai";
const MAINNET_INTERNET_IDENTITY: &str = "https://identity.ic0.app";
const NFID: &str = "https://nfid.one/authenticate/?applicationName=my-ic-app";

/// Longest delegation a login may request (7 days).
pub const MAX_TIME_TO_LIVE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Who the client is acting as.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Identity {
    #[default]
    Anonymous,
    Authenticated {
        principal: Principal,
        /// Identity provider URL the login went through
        provider: String,
    },
}

impl Identity {
    pub fn authenticated(principal: Principal, provider: impl Into<String>) -> Self {
        if principal.is_anonymous() {
            return Identity::Anonymous;
        }
        Identity::Authenticated {
            principal,
            provider: provider.into(),
        }
    }

    pub fn principal(&self) -> Principal {
        match self {
            Identity::Anonymous => Principal::anonymous(),
            Identity::Authenticated { principal, .. } => principal.clone(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::Authenticated { .. })
    }
}

/// Identity provider URLs offered at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityProviders {
    pub internet_identity: String,
    pub nfid: String,
}

impl IdentityProviders {
    /// Internet Identity points at the local replica for `NetworkKind::Local`.
    pub fn for_network(network: NetworkKind) -> Self {
        let internet_identity = match network {
            NetworkKind::Local => LOCAL_INTERNET_IDENTITY,
            NetworkKind::Mainnet => MAINNET_INTERNET_IDENTITY,
        };
        Self {
            internet_identity: internet_identity.to_string(),
            nfid: NFID.to_string(),
        }
    }

    /// `(label, url)` pairs in the order the provider picker shows them.
    pub fn choices(&self) -> [(&'static str, &str); 2] {
        [
            ("Internet Identity", self.internet_identity.as_str()),
            ("NFID", self.nfid.as_str()),
        ]
    }
}

impl Default for IdentityProviders {
    fn default() -> Self {
        Self::for_network(NetworkKind::default())
    }
}
