use dioxus::prelude::*;

#[component]
pub fn LoadingSkeleton() -> Element {
    rsx!(
        div { class: "flex flex-col items-center gap-4 w-full max-w-3xl",
            div { class: "skeleton h-8 w-64" }
            div { class: "skeleton h-96 w-full" }
        }
    )
}
