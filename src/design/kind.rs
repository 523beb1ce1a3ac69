//! Design categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category a design is intended for.
///
/// Serialized with the backend's variant names (`"TextilePrinting"`); the
/// dialogs use the kebab-case [`form_value`](Self::form_value) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignKind {
    Footwear,
    Clothing,
    Accessories,
    TextilePrinting,
}

impl DesignKind {
    pub const ALL: [DesignKind; 4] = [
        DesignKind::Footwear,
        DesignKind::Clothing,
        DesignKind::Accessories,
        DesignKind::TextilePrinting,
    ];

    /// Value used by the category `<select>` in the dialogs.
    pub fn form_value(self) -> &'static str {
        match self {
            DesignKind::Footwear => "footwear",
            DesignKind::Clothing => "clothing",
            DesignKind::Accessories => "accessories",
            DesignKind::TextilePrinting => "textile-printing",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            DesignKind::Footwear => "Footwear",
            DesignKind::Clothing => "Clothing",
            DesignKind::Accessories => "Accessories",
            DesignKind::TextilePrinting => "Textile Printing",
        }
    }

    /// Parses a dialog form value. Unknown values yield `None`.
    pub fn from_form_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.form_value() == value.trim())
    }
}

impl fmt::Display for DesignKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
