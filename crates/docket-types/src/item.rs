//! The immutable record stored under each registered name.

use serde::{Deserialize, Serialize};

use crate::kind::ContentKind;

/// A stored (content, kind) pair.
///
/// Items are created at registration time and never mutated; removing a name
/// from the registry destroys its item. The fields are private so the only
/// way to change what a name maps to is deregister-then-register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    content: String,
    kind: ContentKind,
}

impl Item {
    /// Create a new item. The registry validates `content` against `kind`
    /// before constructing one; this constructor performs no validation.
    pub fn new(content: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    /// The stored content, exactly as registered.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The content kind this item was registered under.
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Consume the item, yielding its content.
    pub fn into_content(self) -> String {
        self.content
    }
}
