use std::rc::Rc;

use dioxus::prelude::*;
use slideshow::shell::{Layout, Loader, Shell, View};

use crate::client::{
    host::initial_path,
    loader::{BundledLayouts, BundledViews, LayoutModule, ViewModule},
    router::Route,
    AppRouter, AppSnapshot,
};

const TAILWIND_CSS: Asset = asset!("/assets/style/tailwind.css");
const GLOBAL_CSS: Asset = asset!("/assets/style/global.css");

#[component]
pub fn App() -> Element {
    let shell = use_context::<Shell>();

    let router: AppRouter = use_context_provider(|| {
        let views: Rc<dyn Loader<View, ViewModule>> = Rc::new(BundledViews);
        let layouts: Rc<dyn Loader<Layout, LayoutModule>> = Rc::new(BundledLayouts);

        let initial_path = initial_path(&shell.config().base_path);

        Rc::new(shell.router(views, layouts, &initial_path))
    });

    let snapshot: Signal<AppSnapshot> = use_signal(|| router.snapshot());
    use_context_provider(|| snapshot);

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: GLOBAL_CSS }
        Router::<Route> {}
    }
}
