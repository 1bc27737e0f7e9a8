//! Module loaders for the components compiled into the client.
//!
//! Every view and layout ships inside the application bundle, so a load resolves to the
//! module's metadata on the next poll. The router still goes through its lazy cache, keeping
//! the render path identical to a split build.

use dioxus_logger::tracing;
use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use slideshow::shell::{error::LoadError, Layout, Loader, View};

/// Loaded view module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewModule {
    pub view: View,
    /// Document title while the view is shown
    pub title: &'static str,
}

/// Loaded layout module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutModule {
    pub layout: Layout,
}

pub struct BundledViews;

impl Loader<View, ViewModule> for BundledViews {
    fn load(&self, view: View) -> LocalBoxFuture<'static, Result<ViewModule, LoadError>> {
        tracing::debug!("Loading view module {}", view);

        let title = match view {
            View::SlideShow => "Slides",
            View::About => "About",
        };

        future::ready(Ok(ViewModule { view, title })).boxed_local()
    }
}

pub struct BundledLayouts;

impl Loader<Layout, LayoutModule> for BundledLayouts {
    fn load(&self, layout: Layout) -> LocalBoxFuture<'static, Result<LayoutModule, LoadError>> {
        tracing::debug!("Loading layout module {}", layout.component_name());

        future::ready(Ok(LayoutModule { layout })).boxed_local()
    }
}
