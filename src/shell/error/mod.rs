//! Error types for the slideshow application shell.
//!
//! Each concern of the shell has its own error type (configuration, module loading,
//! navigation, mounting). All of them use `thiserror` for their `Display` and `Error`
//! implementations and convert into the aggregate [`Error`] via the `?` operator.

pub mod config;
pub mod load;
pub mod mount;
pub mod navigation;

use thiserror::Error;

pub use config::ConfigError;
pub use load::LoadError;
pub use mount::MountError;
pub use navigation::NavigationError;

/// Main error type for the application shell.
///
/// Aggregates the domain-specific errors so that the bootstrap sequence can return a single
/// error type regardless of which step failed.
///
/// # Error Categories
/// - Configuration errors (unknown layouts, invalid route table, invalid environment values)
/// - Load errors (a view or layout module failed to load)
/// - Navigation errors (route miss, superseded navigation)
/// - Mount errors (missing or invalid mount anchor)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error, always fatal at startup.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A deferred module failed to load.
    #[error(transparent)]
    LoadError(#[from] LoadError),
    /// A navigation did not produce a new route.
    #[error(transparent)]
    NavigationError(#[from] NavigationError),
    /// The application could not be attached to its host.
    #[error(transparent)]
    MountError(#[from] MountError),
}
