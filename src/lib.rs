//! Slideshow web application.
//!
//! The [`shell`] module holds the routing core: layouts, the route table, lazily loaded
//! views and the bootstrap sequence. The Dioxus binary renders whatever the shell resolves.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod shell;
