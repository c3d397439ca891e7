//! Foundation types for Docket.
//!
//! This crate provides the core data types shared by every other Docket
//! crate: the closed set of recognized content kinds and the immutable item
//! record the registry stores.
//!
//! # Key Types
//!
//! - [`ContentKind`] — Closed enumeration of recognized content kinds (JSON,
//!   XML) with an exhaustive mapping to and from the external integer codes
//! - [`Item`] — Immutable record pairing a content string with its kind

pub mod item;
pub mod kind;

pub use item::Item;
pub use kind::ContentKind;
