use dioxus::prelude::*;

/// Shown when the page for the latest navigation could not be loaded.
#[component]
pub fn LoadErrorBanner(message: String) -> Element {
    rsx!(
        div { role: "alert", class: "alert alert-error w-full max-w-3xl",
            p { "The page could not be loaded: {message}" }
        }
    )
}
