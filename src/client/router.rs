use dioxus::prelude::*;
use dioxus_logger::tracing;
use slideshow::shell::{config::join_base, error::NavigationError, Layout, NavStatus};

use crate::client::{
    components::{AuthLayout, DefaultLayout, LoadErrorBanner, LoadingSkeleton},
    loader::ViewModule,
    routes::{About, NotFound, SlideShow},
    AppRouter, AppSnapshot,
};

/// Browser history integration.
///
/// Every URL is handed to the shell router, which owns the route table.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/:..segments")]
    Screen { segments: Vec<String> },
}

#[component]
pub fn Screen(segments: Vec<String>) -> Element {
    let router = use_context::<AppRouter>();
    let mut snapshot = use_context::<Signal<AppSnapshot>>();

    let path = join_base(router.base_path(), &segments);

    use_effect(use_reactive((&path,), move |(path,)| {
        let router = router.clone();

        spawn(async move {
            let navigation = router.navigate(&path);
            snapshot.set(router.snapshot());

            match navigation.await {
                Ok(_) | Err(NavigationError::Superseded(_)) => {}
                Err(err) => tracing::warn!("{}", err),
            }

            snapshot.set(router.snapshot());
        });
    }));

    let state = snapshot.read();
    let failure = match &state.status {
        NavStatus::Failed { error, .. } => Some(error.to_string()),
        _ => None,
    };

    match (&state.status, &state.current) {
        (NavStatus::NotFound { path }, _) => rsx! {
            DefaultLayout {
                NotFound { path: path.clone() }
            }
        },
        (_, Some(route)) => rsx! {
            LayoutFrame { layout: route.layout.layout,
                if let Some(message) = failure {
                    LoadErrorBanner { message }
                }
                ViewOutlet { module: route.view }
            }
        },
        (_, None) => rsx! {
            DefaultLayout {
                if let Some(message) = failure {
                    LoadErrorBanner { message }
                } else {
                    LoadingSkeleton {}
                }
            }
        },
    }
}

/// Wraps its children in the component for `layout`
#[component]
fn LayoutFrame(layout: Layout, children: Element) -> Element {
    match layout {
        Layout::Auth => rsx! {
            AuthLayout { {children} }
        },
        Layout::Default => rsx! {
            DefaultLayout { {children} }
        },
    }
}

#[component]
fn ViewOutlet(module: ViewModule) -> Element {
    use slideshow::shell::View;

    let view = match module.view {
        View::SlideShow => rsx! { SlideShow {} },
        View::About => rsx! { About {} },
    };

    rsx! {
        document::Title { "{module.title} | Slideshow" }
        {view}
    }
}
