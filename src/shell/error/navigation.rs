use thiserror::Error;

use crate::shell::error::LoadError;

/// Reasons a call to [`Router::navigate`](crate::shell::Router::navigate) did not produce a new
/// route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No route in the table matches the path.
    #[error("No route matches path {0:?}")]
    NotFound(String),
    /// The view or layout of the matched route failed to load.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// A newer navigation was issued before this one completed, its result was discarded.
    #[error("Navigation to {0:?} was superseded by a newer navigation")]
    Superseded(String),
}
