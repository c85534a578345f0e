//! Process-wide provider API bootstrap.
//!
//! The provider's embed script must be requested exactly once per process,
//! and the global "API ready" signal flips exactly once and is never reset.
//! Instances waiting on it are held by [`crate::registry::InstanceRegistry`],
//! which fans the signal out after [`ProviderBootstrap::mark_ready`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crate::error::BootstrapError;

/// Location of the provider's embed API script.
pub const PROVIDER_API_URL: &str = "https://www.youtube.com/iframe_api";

/// Injects the provider API script into the host.
pub trait ScriptLoader {
    fn inject(&mut self, url: &str) -> Result<(), BootstrapError>;
}

/// Outcome of [`ProviderBootstrap::ensure_loaded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// This call injected the script
    Requested,
    /// Another caller already injected it; ready has not fired yet
    AlreadyLoading,
    /// The API is ready
    AlreadyReady,
}

/// Init-once provider loader state.
#[derive(Debug)]
pub struct ProviderBootstrap {
    loading: AtomicBool,
    ready: OnceLock<()>,
}

impl Default for ProviderBootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderBootstrap {
    pub const fn new() -> Self {
        Self {
            loading: AtomicBool::new(false),
            ready: OnceLock::new(),
        }
    }

    /// The process-wide instance.
    pub fn global() -> &'static ProviderBootstrap {
        static GLOBAL: ProviderBootstrap = ProviderBootstrap::new();
        &GLOBAL
    }

    /// Request the provider script unless it is already loading or loaded.
    ///
    /// A failed injection resets the loading guard so a later call may retry.
    pub fn ensure_loaded(&self, loader: &mut dyn ScriptLoader) -> Result<LoadStatus, BootstrapError> {
        if self.is_ready() {
            tracing::debug!("provider API already loaded");
            return Ok(LoadStatus::AlreadyReady);
        }
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("provider API already loading");
            return Ok(LoadStatus::AlreadyLoading);
        }

        match loader.inject(PROVIDER_API_URL) {
            Ok(()) => {
                tracing::info!(url = PROVIDER_API_URL, "provider API script requested");
                Ok(LoadStatus::Requested)
            }
            Err(e) => {
                self.loading.store(false, Ordering::Release);
                tracing::error!(error = %e, "provider API script failed");
                Err(e)
            }
        }
    }

    /// Record the provider's global ready callback.
    ///
    /// Returns `true` only for the first call.
    pub fn mark_ready(&self) -> bool {
        let first = self.ready.set(()).is_ok();
        self.loading.store(false, Ordering::Release);
        if first {
            tracing::info!("provider API ready");
        }
        first
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get().is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }
}
