use dioxus::prelude::*;

#[component]
pub fn NotFound(path: String) -> Element {
    rsx!(
        document::Title { "Not found | Slideshow" }
        div { class: "flex flex-col items-center gap-4",
            p { class: "text-2xl", "Page not found" }
            p { class: "text-sm", "Nothing is served at {path}" }
            Link { to: "/", class: "btn btn-primary", "Back to slides" }
        }
    )
}
