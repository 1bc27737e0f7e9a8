use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleInfo, FaImages};
use dioxus_free_icons::Icon;

use crate::client::components::SlideshowTitleButton;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                SlideshowTitleButton {}
            }
            div {
                class: "navbar-end",
                ul { class: "flex gap-2",
                    li {
                        Link { to: "/slide", class: "btn btn-ghost flex gap-2",
                            Icon {
                                width: 18,
                                height: 18,
                                icon: FaImages
                            }
                            "Slides"
                        }
                    }
                    li {
                        Link { to: "/about", class: "btn btn-ghost flex gap-2",
                            Icon {
                                width: 18,
                                height: 18,
                                icon: FaCircleInfo
                            }
                            "About"
                        }
                    }
                }
            }
        }
    }
}
