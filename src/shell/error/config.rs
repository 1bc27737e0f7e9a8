use thiserror::Error;

use crate::shell::layout::Layout;

/// Errors in the static application configuration.
///
/// These are reported while bootstrapping and abort startup, they are never recovered from at
/// render time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A layout name outside of the known set was used.
    #[error("Unknown layout: {0:?}")]
    UnknownLayout(String),
    /// A route references a layout which was never registered.
    #[error("Route {route:?} uses layout {layout} which is not registered")]
    UnregisteredLayout {
        /// Path of the offending route.
        route: &'static str,
        /// Layout the route asked for.
        layout: Layout,
    },
    /// Two routes are bound to the same path.
    #[error("Path {0:?} is bound to more than one route")]
    DuplicatePath(&'static str),
    /// An environment variable holds a value that cannot be used.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}
