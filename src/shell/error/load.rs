use thiserror::Error;

/// Failure to load a deferred view or layout module.
///
/// Loads are shared between every caller waiting on the same module, so the error is `Clone`
/// and each waiter receives its own copy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The module could not be fetched (network error, cancelled request).
    #[error("Failed to fetch module {module}: {reason}")]
    Fetch {
        /// Name of the module.
        module: String,
        /// Underlying failure.
        reason: String,
    },
    /// The module belongs to a layout that was never registered.
    #[error("Module {module} is not registered")]
    Unregistered {
        /// Name of the module.
        module: String,
    },
    /// The module was fetched but could not be instantiated.
    #[error("Failed to instantiate module {module}: {reason}")]
    Module {
        /// Name of the module.
        module: String,
        /// Underlying failure.
        reason: String,
    },
}

impl LoadError {
    /// Name of the module which failed to load
    pub fn module(&self) -> &str {
        match self {
            Self::Fetch { module, .. }
            | Self::Unregistered { module }
            | Self::Module { module, .. } => module,
        }
    }
}
