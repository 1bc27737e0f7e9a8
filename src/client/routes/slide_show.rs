use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

struct Slide {
    title: &'static str,
    body: &'static str,
}

const SLIDES: [Slide; 4] = [
    Slide {
        title: "Welcome",
        body: "Move through the deck with the buttons below or the arrow keys.",
    },
    Slide {
        title: "Layouts",
        body: "Every page is wrapped in a layout. The slides use the default layout with the navbar, the about page uses a framed layout.",
    },
    Slide {
        title: "Lazy pages",
        body: "Views and layouts are loaded on first use and cached, navigating back is instant.",
    },
    Slide {
        title: "Thanks",
        body: "That is the whole deck.",
    },
];

#[component]
pub fn SlideShow() -> Element {
    let mut current = use_signal(|| 0usize);
    let last = SLIDES.len() - 1;

    let mut previous = move || current.with_mut(|index| *index = index.saturating_sub(1));
    let mut next = move || current.with_mut(|index| *index = (*index + 1).min(last));

    let index = current();
    let slide = &SLIDES[index];
    let position = format!("{} / {}", index + 1, SLIDES.len());

    rsx!(
        div {
            class: "slide-deck flex flex-col items-center gap-6 w-full max-w-3xl outline-none",
            tabindex: 0,
            onkeydown: move |evt: KeyboardEvent| match evt.key() {
                Key::ArrowLeft => previous(),
                Key::ArrowRight => next(),
                _ => {}
            },
            div { class: "card bg-base-100 shadow-sm w-full min-h-96",
                div { class: "card-body items-center justify-center text-center",
                    h2 { class: "card-title text-3xl", "{slide.title}" }
                    p { class: "text-lg", "{slide.body}" }
                }
            }
            div { class: "flex items-center gap-4",
                button {
                    class: "btn btn-outline",
                    disabled: index == 0,
                    onclick: move |_| previous(),
                    Icon { width: 16, height: 16, icon: FaChevronLeft }
                }
                p { class: "text-sm", "{position}" }
                button {
                    class: "btn btn-outline",
                    disabled: index == last,
                    onclick: move |_| next(),
                    Icon { width: 16, height: 16, icon: FaChevronRight }
                }
            }
        }
    )
}
