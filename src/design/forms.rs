//! Dialog and registration form validation.

use super::DesignKind;
use crate::backend::RegisterRequest;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum display name length accepted at registration.
pub const MIN_NAME_LEN: usize = 3;
/// Maximum display name length accepted at registration.
pub const MAX_NAME_LEN: usize = 30;

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"));

/// A form field that failed validation. The `Display` text is the notice
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a pattern name")]
    MissingPatternName,

    #[error("Please select a design type")]
    MissingDesignType,

    #[error("Unknown design type '{0}'")]
    UnknownDesignType(String),

    #[error("Please select a GLB file")]
    MissingFile,

    #[error("Name must be between {MIN_NAME_LEN} and {MAX_NAME_LEN} characters")]
    NameLength,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// State of the save/import dialog fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignForm {
    pub name: String,
    pub description: String,
    /// Raw category form value; `None` until the user picks one
    pub kind: Option<String>,
    pub visible_3d_rendering: bool,
}

/// A [`DesignForm`] that passed validation, with trimmed text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDesignForm {
    pub name: String,
    pub description: String,
    pub kind: DesignKind,
    pub visible_3d_rendering: bool,
}

impl DesignForm {
    pub fn new(name: impl Into<String>, kind: Option<DesignKind>) -> Self {
        Self {
            name: name.into(),
            kind: kind.map(|k| k.form_value().to_string()),
            ..Self::default()
        }
    }

    /// Checks the name first, then the category.
    pub fn validate(&self) -> Result<ValidDesignForm, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingPatternName);
        }

        let raw_kind = self
            .kind
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ValidationError::MissingDesignType)?;
        let kind = DesignKind::from_form_value(raw_kind)
            .ok_or_else(|| ValidationError::UnknownDesignType(raw_kind.to_string()))?;

        Ok(ValidDesignForm {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            kind,
            visible_3d_rendering: self.visible_3d_rendering,
        })
    }

    /// Resets every field, as the dialog does after a successful submit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Registration page fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    /// Avatar image bytes, if the user picked one
    pub avatar: Option<Vec<u8>>,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let name = self.name.trim();
        let length = name.chars().count();
        if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&length) {
            return Err(ValidationError::NameLength);
        }

        let email = self.email.trim();
        let email = if email.is_empty() {
            None
        } else if is_valid_email(email) {
            Some(email.to_string())
        } else {
            return Err(ValidationError::InvalidEmail);
        };

        Ok(RegisterRequest {
            name: name.to_string(),
            email,
            avatar: self.avatar.clone(),
        })
    }
}

/// `local@domain.tld` with a purely alphabetic TLD of two or more letters.
pub fn is_valid_email(email: &str) -> bool {
    match &*EMAIL_PATTERN {
        Ok(pattern) => pattern.is_match(email),
        Err(err) => {
            log::error!("Email pattern failed to compile: {}", err);
            false
        }
    }
}
