use dioxus::document::Meta;
use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx!(
        Meta {
            name: "description",
            content: "About the slideshow."
        }
        h2 { class: "card-title", "About" }
        p {
            "A small slide deck rendered entirely in the browser. Use the navigation on the slides page or your arrow keys to move between slides."
        }
        p {
            "Pages are loaded the first time they are visited and reused afterwards."
        }
        div { class: "card-actions justify-end",
            Link { to: "/slide", class: "btn btn-primary", "View slides" }
        }
    )
}
