//! The lifecycle-gated [`Registry`] facade.

use std::sync::atomic::{AtomicBool, Ordering};

use docket_types::{ContentKind, Item};
use tracing::{debug, info};

use crate::error::{RegistryError, Result};
use crate::memory::InMemoryItemStore;
use crate::traits::ItemStore;
use crate::validate::validate_content;

/// The registry: a concurrency-safe store of named typed text items, gated
/// behind a one-time initialization.
///
/// Every operation except [`Registry::initialize`] fails with
/// [`RegistryError::NotReady`] until initialization has completed. The
/// registry itself lives for the duration of the owning process; items are
/// created by [`Registry::register`] and destroyed by
/// [`Registry::deregister`].
///
/// All methods take `&self` and are safe to call from any number of threads
/// sharing one instance.
pub struct Registry {
    store: InMemoryItemStore,
    ready: AtomicBool,
}

impl Registry {
    /// Create a new registry in the not-ready state.
    pub fn new() -> Self {
        Self {
            store: InMemoryItemStore::new(),
            ready: AtomicBool::new(false),
        }
    }

    /// Transition the registry from not-ready to ready.
    ///
    /// Idempotent: the first call performs the transition and every later
    /// call is a no-op. The transition is a single compare-and-swap, so under
    /// concurrent invocation exactly one caller performs it and no caller
    /// ever observes a premature ready state.
    pub fn initialize(&self) {
        if self
            .ready
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            info!("registry initialized");
        }
    }

    /// Returns `true` once [`Registry::initialize`] has completed.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Register `content` under `name` with the given kind.
    ///
    /// The content must pass the shape check for `kind` and the name must be
    /// unused. The existence check and the insertion are one atomic step: of
    /// any number of concurrent registrations for the same name, at most one
    /// succeeds and the rest observe [`RegistryError::AlreadyExists`].
    pub fn register(&self, name: &str, content: &str, kind: ContentKind) -> Result<()> {
        self.check_ready()?;
        validate_content(content, kind)?;

        if !self.store.insert_if_absent(name, Item::new(content, kind)) {
            return Err(RegistryError::AlreadyExists {
                name: name.to_string(),
            });
        }
        debug!(name, %kind, "item registered");
        Ok(())
    }

    /// Register with the kind given as its external integer code.
    ///
    /// Unrecognized codes fail with [`RegistryError::InvalidFormat`] before
    /// any insertion is attempted.
    pub fn register_coded(&self, name: &str, content: &str, code: u32) -> Result<()> {
        self.check_ready()?;
        let kind = ContentKind::from_code(code).ok_or(RegistryError::InvalidFormat {
            reason: format!("unrecognized content kind code: {code}"),
        })?;
        self.register(name, content, kind)
    }

    /// Return the content stored under `name`, exactly as registered.
    pub fn retrieve(&self, name: &str) -> Result<String> {
        self.check_ready()?;
        self.store
            .get(name)
            .map(Item::into_content)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    /// Return the kind of the item stored under `name`.
    pub fn kind(&self, name: &str) -> Result<ContentKind> {
        self.check_ready()?;
        self.store
            .get(name)
            .map(|item| item.kind())
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    /// Return the external integer kind code of the item stored under `name`.
    pub fn kind_code(&self, name: &str) -> Result<u32> {
        self.kind(name).map(ContentKind::code)
    }

    /// Remove the item stored under `name`.
    ///
    /// The removal atomically reports success: of any number of concurrent
    /// deregistrations for the same name, exactly one succeeds and the rest
    /// observe [`RegistryError::NotFound`].
    pub fn deregister(&self, name: &str) -> Result<()> {
        self.check_ready()?;
        if !self.store.remove(name) {
            return Err(RegistryError::NotFound {
                name: name.to_string(),
            });
        }
        debug!(name, "item deregistered");
        Ok(())
    }

    fn check_ready(&self) -> Result<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(RegistryError::NotReady)
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("ready", &self.is_ready())
            .field("store", &self.store)
            .finish()
    }
}
