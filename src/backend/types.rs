//! Records exchanged with the backend actor.

use super::BackendError;
use crate::design::{DesignKind, FileAsset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned design identifier.
pub type DesignId = u64;

const ANONYMOUS_PRINCIPAL: &str = "2vxsx-fae";

/// Textual caller identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The principal every unauthenticated caller shares.
    pub fn anonymous() -> Self {
        Self(ANONYMOUS_PRINCIPAL.to_string())
    }

    pub fn is_anonymous(&self) -> bool {
        self.0 == ANONYMOUS_PRINCIPAL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Principal,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<Vec<u8>>,
    /// Registration time in nanoseconds since the Unix epoch
    pub register_date: i64,
    #[serde(default)]
    pub designs: Vec<DesignId>,
    #[serde(default)]
    pub followers: Vec<Principal>,
    #[serde(default, rename = "followeds")]
    pub following: Vec<Principal>,
}

/// Summary of a design as listed by gallery queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignPreview {
    pub id: DesignId,
    pub owner: Principal,
    pub name: String,
    pub description: String,
    pub kind: DesignKind,
    pub cover_image: FileAsset,
    /// Creation time in nanoseconds since the Unix epoch
    pub date_creation: i64,
    #[serde(rename = "visible3DRendering")]
    pub visible_3d_rendering: bool,
    /// Source files attached at creation (PNG export or imported model)
    #[serde(default)]
    pub source_files: Vec<FileAsset>,
}

impl DesignPreview {
    /// First attached `.glb` source file, if any.
    pub fn model_file(&self) -> Option<&FileAsset> {
        self.source_files
            .iter()
            .find(|file| crate::design::asset::has_glb_extension(&file.name))
    }
}

/// Payload of the `register` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: Option<String>,
    pub avatar: Option<Vec<u8>>,
}

/// Explicit success/failure result as returned by the actor.
///
/// Serialized as `{"Ok": value}` or `{"Err": "message"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallResult<T> {
    Ok(T),
    Err(String),
}

impl<T> CallResult<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, CallResult::Ok(_))
    }

    /// Converts into a `Result`, mapping the error text to [`BackendError::Rejected`].
    pub fn into_result(self) -> Result<T, BackendError> {
        match self {
            CallResult::Ok(value) => Ok(value),
            CallResult::Err(message) => Err(BackendError::Rejected(message)),
        }
    }
}

impl<T> From<Result<T, String>> for CallResult<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => CallResult::Ok(value),
            Err(message) => CallResult::Err(message),
        }
    }
}
