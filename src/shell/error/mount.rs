use thiserror::Error;

/// Failure to attach the application to its host page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// The anchor id cannot identify an element.
    #[error("Invalid mount anchor id {0:?}")]
    InvalidAnchor(String),
    /// The host has no element with the anchor id.
    #[error("Mount anchor #{0} is missing from the host page")]
    MissingAnchor(String),
}
