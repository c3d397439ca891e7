//! The closed set of content kinds the registry recognizes.
//!
//! Callers at the external boundary identify kinds by integer code (`1` for
//! JSON, `2` for XML). Inside the system the kind is always the [`ContentKind`]
//! enum; the integer surface exists only at the edges and is mapped through
//! [`ContentKind::from_code`], which rejects every unrecognized code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A recognized content kind for a registered item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    /// JSON content. External code `1`.
    Json,
    /// XML content. External code `2`.
    Xml,
}

impl ContentKind {
    /// The external integer code for this kind.
    pub const fn code(self) -> u32 {
        match self {
            ContentKind::Json => 1,
            ContentKind::Xml => 2,
        }
    }

    /// Map an external integer code to a kind.
    ///
    /// Returns `None` for every code outside the recognized set. Callers must
    /// treat `None` as a validation failure, never as an internal error.
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(ContentKind::Json),
            2 => Some(ContentKind::Xml),
            _ => None,
        }
    }

    /// The delimiter pair a content string of this kind must carry once
    /// surrounding whitespace is trimmed.
    pub const fn delimiters(self) -> (char, char) {
        match self {
            ContentKind::Json => ('{', '}'),
            ContentKind::Xml => ('<', '>'),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Json => write!(f, "json"),
            ContentKind::Xml => write!(f, "xml"),
        }
    }
}
