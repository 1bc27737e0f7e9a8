use dioxus::prelude::*;

use crate::client::components::{Navbar, Page};

/// Layout with the site navbar, registered as "default-layout".
#[component]
pub fn DefaultLayout(children: Element) -> Element {
    rsx! {
        Navbar {}
        Page { class: "flex flex-col items-center",
            {children}
        }
    }
}
