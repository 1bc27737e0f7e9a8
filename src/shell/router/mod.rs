//! Navigation between routes.
//!
//! The [`Router`] maps a requested path to a route from the [`RouteTable`], loads the route's
//! view and layout, and tracks which route is on screen. Navigations may overlap: only the
//! most recently issued one is allowed to change the visible route, results of older
//! navigations are discarded when they arrive.

pub mod state;


use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use dioxus_logger::tracing;

use crate::shell::{
    config::strip_base,
    error::{LoadError, NavigationError},
    layout::{Layout, LayoutRegistry},
    loader::{LazyCache, Loader},
    route::{RouteTable, View},
};

pub use state::{NavStatus, ResolvedRoute, RouterSnapshot};

/// Client-side router.
///
/// # State machine
/// `Idle` → `Resolving` when a navigation is issued, then `Resolving` → `Resolved` once the
/// view and layout are loaded or `Resolving` → `Failed` when either fails to load. A path
/// without a route moves straight to `NotFound`. Every new navigation moves back to
/// `Resolving`.
///
/// The visible route and the status live in one cell and are replaced together, observers
/// never see a new status paired with an old route or the reverse.
pub struct Router<V, L> {
    table: RouteTable,
    base_path: String,
    views: LazyCache<View, V>,
    layouts: LayoutRegistry<L>,
    state: RefCell<RouterSnapshot<V, L>>,
    latest: Cell<u64>,
}

impl<V, L> Router<V, L>
where
    V: Clone + 'static,
    L: Clone + 'static,
{
    /// Create an idle router
    ///
    /// # Arguments
    /// - `table` - Validated route table
    /// - `base_path` - Normalized base path stripped from every requested path
    /// - `views` - Loader for view components
    /// - `layouts` - Registry holding the layouts used by `table`
    pub fn new(
        table: RouteTable,
        base_path: impl Into<String>,
        views: Rc<dyn Loader<View, V>>,
        layouts: LayoutRegistry<L>,
    ) -> Self {
        Self {
            table,
            base_path: base_path.into(),
            views: LazyCache::new(views),
            layouts,
            state: RefCell::new(RouterSnapshot::default()),
            latest: Cell::new(0),
        }
    }

    /// Mark the router as resolving the URL the application was opened at.
    ///
    /// The navigation itself is issued by the rendering layer on its first pass, until then the
    /// router reports `Resolving` instead of `Idle`.
    pub fn opened_at(self, path: impl Into<String>) -> Self {
        self.state.borrow_mut().status = NavStatus::Resolving { path: path.into() };
        self
    }

    /// Navigate to `path`.
    ///
    /// The navigation is issued when this method is called: the status becomes `Resolving`
    /// (or `NotFound`) immediately and any navigation issued earlier is superseded. The
    /// returned future loads the view and layout and applies the result. Dropping the future
    /// before it completes cancels the navigation: the loads stay cached and, unless a newer
    /// navigation was issued, the status returns to what it was before.
    ///
    /// # Returns
    /// - `Ok(ResolvedRoute)` - The route is now current
    /// - `Err(NavigationError::NotFound)` - No route matches `path`
    /// - `Err(NavigationError::Load)` - The view or layout failed to load
    /// - `Err(NavigationError::Superseded)` - A newer navigation was issued before this one
    ///   completed, its result was discarded
    pub fn navigate(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<ResolvedRoute<V, L>, NavigationError>> + '_ {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);

        let path = path.to_string();
        let entry = strip_base(&self.base_path, &path)
            .and_then(|route_path| self.table.resolve(route_path))
            .copied();

        // Loads start here so that issuing a navigation is enough to begin fetching.
        let pending = entry.map(|entry| {
            tracing::debug!(ticket, "navigating to {}", path);
            let previous = std::mem::replace(
                &mut self.state.borrow_mut().status,
                NavStatus::Resolving { path: path.clone() },
            );

            let load = futures::future::try_join(
                self.views.get(entry.view),
                self.layouts.resolve_layout(entry.layout),
            );
            let guard = CancelGuard {
                router: self,
                ticket,
                previous: Some(previous),
            };

            (entry, load, guard)
        });

        if pending.is_none() {
            tracing::warn!("no route matches {}", path);
            self.state.borrow_mut().status = NavStatus::NotFound { path: path.clone() };
        }

        async move {
            let Some((entry, load, mut guard)) = pending else {
                return Err(NavigationError::NotFound(path));
            };

            let loaded = load.await;
            guard.disarm();

            if ticket != self.latest.get() {
                tracing::debug!(ticket, "discarding stale navigation to {}", path);
                return Err(NavigationError::Superseded(path));
            }

            let mut state = self.state.borrow_mut();
            match loaded {
                Ok((view, layout)) => {
                    let resolved = ResolvedRoute {
                        path,
                        entry,
                        view,
                        layout,
                    };

                    *state = RouterSnapshot {
                        status: NavStatus::Resolved,
                        current: Some(resolved.clone()),
                    };

                    Ok(resolved)
                }
                Err(err) => {
                    tracing::warn!("navigation to {} failed: {}", path, err);

                    state.status = NavStatus::Failed {
                        path,
                        error: err.clone(),
                    };

                    Err(err.into())
                }
            }
        }
    }

    /// Current navigation status
    pub fn status(&self) -> NavStatus {
        self.state.borrow().status.clone()
    }

    /// Route currently on screen
    pub fn current(&self) -> Option<ResolvedRoute<V, L>> {
        self.state.borrow().current.clone()
    }

    /// Copy of the whole router state
    pub fn snapshot(&self) -> RouterSnapshot<V, L> {
        self.state.borrow().clone()
    }

    /// Routes this router serves
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Base path stripped from requested paths
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolve a layout outside of a navigation, sharing the navigation cache
    pub fn resolve_layout(
        &self,
        layout: Layout,
    ) -> impl Future<Output = Result<L, LoadError>> + '_ {
        self.layouts.resolve_layout(layout)
    }
}

impl<V, L> Router<V, L> {
    /// Undo the `Resolving` status of a navigation that was dropped before completing
    fn cancel(&self, ticket: u64, previous: NavStatus) {
        if ticket != self.latest.get() {
            return;
        }

        tracing::debug!(ticket, "navigation dropped before completing");

        let mut state = self.state.borrow_mut();
        state.status = match previous {
            // The earlier navigation was superseded by the dropped one, nothing is loading.
            NavStatus::Resolving { .. } if state.current.is_some() => NavStatus::Resolved,
            NavStatus::Resolving { .. } => NavStatus::Idle,
            other => other,
        };
    }
}

/// Restores the router status when a pending navigation is dropped.
struct CancelGuard<'a, V, L> {
    router: &'a Router<V, L>,
    ticket: u64,
    previous: Option<NavStatus>,
}

impl<V, L> CancelGuard<'_, V, L> {
    fn disarm(&mut self) {
        self.previous = None;
    }
}

impl<V, L> Drop for CancelGuard<'_, V, L> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.router.cancel(self.ticket, previous);
        }
    }
}
