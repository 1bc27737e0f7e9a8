use dioxus::prelude::*;

use crate::client::components::SlideshowTitleButton;

/// Framed layout without the site navbar, registered as "auth-layout".
#[component]
pub fn AuthLayout(children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-base-200 flex flex-col items-center justify-center gap-4 p-4",
            SlideshowTitleButton {}
            div {
                class: "card bg-base-100 shadow-sm w-full max-w-2xl",
                div { class: "card-body",
                    {children}
                }
            }
        }
    }
}
