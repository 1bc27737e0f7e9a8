use dioxus::prelude::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn SlideshowTitleButton() -> Element {
    rsx!(
        Link {
            to: "/",
            div { class: "flex items-center gap-2",
                p { class: "text-xl",
                    "Slideshow"
                }
                p { class: "text-xs",
                    "v{VERSION}"
                }
            }
        }
    )
}
