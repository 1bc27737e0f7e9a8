//! Deferred module loading.
//!
//! Views and layouts are not available up front, they are produced by a [`Loader`] the first
//! time they are needed. [`LazyCache`] sits in front of a loader and guarantees that each key
//! is fetched at most once while it succeeds, no matter how many callers ask for it at once.

pub mod cache;

#[cfg(test)]
mod tests;

use futures::future::LocalBoxFuture;

use crate::shell::error::LoadError;

pub use cache::LazyCache;

/// Produces the component for a key asynchronously.
///
/// The returned future is not required to be `Send`, loads run on the single-threaded UI
/// event loop.
pub trait Loader<K, C> {
    /// Start loading the component for `key`
    fn load(&self, key: K) -> LocalBoxFuture<'static, Result<C, LoadError>>;
}
