//! Delimiter shape validation for registered content.
//!
//! The check is deliberately shallow: JSON content must start with `{` and
//! end with `}` once surrounding whitespace is trimmed, XML content likewise
//! with `<` and `>`. Nothing between the delimiters is inspected. The
//! registry accepts any payload that carries the right brackets; real
//! parsing would change which payloads are accepted.

use docket_types::ContentKind;

use crate::error::{RegistryError, Result};

/// Validate a content string against the shape rule for `kind`.
///
/// Leading whitespace is ignored for the opening delimiter and trailing
/// whitespace for the closing one. Empty and all-whitespace content fails
/// for every kind.
///
/// # Examples
///
/// ```
/// use docket_registry::validate::validate_content;
/// use docket_types::ContentKind;
///
/// assert!(validate_content(r#"{"a":1}"#, ContentKind::Json).is_ok());
/// assert!(validate_content("  <root/>  ", ContentKind::Xml).is_ok());
/// assert!(validate_content("not json", ContentKind::Json).is_err());
/// ```
pub fn validate_content(content: &str, kind: ContentKind) -> Result<()> {
    let (open, close) = kind.delimiters();
    if content.trim_start().starts_with(open) && content.trim_end().ends_with(close) {
        Ok(())
    } else {
        Err(RegistryError::InvalidFormat {
            reason: format!("{kind} content must start with '{open}' and end with '{close}'"),
        })
    }
}
