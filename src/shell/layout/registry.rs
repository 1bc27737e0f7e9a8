use std::collections::BTreeSet;
use std::future::Future;
use std::rc::Rc;

use dioxus_logger::tracing;
use futures::future::{self, Either};

use crate::shell::{
    error::LoadError,
    layout::Layout,
    loader::{LazyCache, Loader},
};

/// Registered layouts and their lazily loaded components.
///
/// The registered set is fixed when the registry is built, bootstrap rejects unknown layout
/// names before that point. Components are loaded on first resolution and reused afterwards.
pub struct LayoutRegistry<L> {
    registered: BTreeSet<Layout>,
    components: LazyCache<Layout, L>,
}

impl<L: Clone + 'static> LayoutRegistry<L> {
    /// Create a registry serving `layouts` through `loader`
    pub fn with_layouts(
        loader: Rc<dyn Loader<Layout, L>>,
        layouts: impl IntoIterator<Item = Layout>,
    ) -> Self {
        Self {
            registered: layouts.into_iter().collect(),
            components: LazyCache::new(loader),
        }
    }

    /// Whether `layout` has been registered
    pub fn is_registered(&self, layout: Layout) -> bool {
        self.registered.contains(&layout)
    }

    /// Registered layouts in order
    pub fn registered(&self) -> &BTreeSet<Layout> {
        &self.registered
    }

    /// Resolve the component for `layout`.
    ///
    /// The first call fetches the component, later calls and calls made while the fetch is in
    /// flight share its result. A layout outside the registered set is never fetched.
    ///
    /// # Returns
    /// - `Ok(L)` - The layout component
    /// - `Err(LoadError::Unregistered)` - `layout` was not registered at bootstrap
    /// - `Err(LoadError)` - The fetch failed
    pub fn resolve_layout(
        &self,
        layout: Layout,
    ) -> impl Future<Output = Result<L, LoadError>> + '_ {
        if !self.is_registered(layout) {
            tracing::warn!("Layout {} was resolved but never registered", layout);

            return Either::Left(future::ready(Err(LoadError::Unregistered {
                module: layout.component_name().to_string(),
            })));
        }

        Either::Right(self.components.get(layout))
    }

    /// Whether the component for `layout` is already loaded
    pub fn is_loaded(&self, layout: Layout) -> bool {
        self.components.is_loaded(layout)
    }
}
