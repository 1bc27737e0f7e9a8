use crate::shell::{error::LoadError, route::RouteEntry};

/// Navigation state of the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavStatus {
    /// No navigation has been issued yet.
    Idle,
    /// The view and layout for `path` are loading.
    Resolving {
        /// Requested path.
        path: String,
    },
    /// The most recent navigation completed, see [`RouterSnapshot::current`].
    Resolved,
    /// The most recent navigation failed to load, the previous route is still current.
    Failed {
        /// Requested path.
        path: String,
        /// Why the view or layout failed to load.
        error: LoadError,
    },
    /// The most recent navigation matched no route, the previous route is still current.
    NotFound {
        /// Requested path.
        path: String,
    },
}

/// A route whose view and layout have both been loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute<V, L> {
    /// Path as requested, including any base path.
    pub path: String,
    /// Matched route.
    pub entry: RouteEntry,
    /// Loaded view component.
    pub view: V,
    /// Loaded layout component.
    pub layout: L,
}

/// Point-in-time copy of the router state.
#[derive(Debug, Clone, PartialEq)]
pub struct RouterSnapshot<V, L> {
    /// Navigation state.
    pub status: NavStatus,
    /// Route currently on screen.
    pub current: Option<ResolvedRoute<V, L>>,
}

impl<V, L> RouterSnapshot<V, L> {
    /// Whether a navigation is in flight
    pub fn is_resolving(&self) -> bool {
        matches!(self.status, NavStatus::Resolving { .. })
    }
}

impl<V, L> Default for RouterSnapshot<V, L> {
    fn default() -> Self {
        Self {
            status: NavStatus::Idle,
            current: None,
        }
    }
}
