//! Application shell: layouts, routes and navigation.
//!
//! This module contains everything the client needs to decide *what* to render for a given
//! URL, independent of the rendering layer. It provides the closed set of layouts and views,
//! the static route table, the lazy module cache that loads components on first use, the
//! navigation state machine, and the bootstrap sequence that wires them together.

#![warn(missing_docs)]

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod layout;
pub mod loader;
pub mod route;
pub mod router;

pub use bootstrap::{Bootstrap, Host, Shell, LAYOUT_COMPONENTS};
pub use config::Config;
pub use error::Error;
pub use layout::{Layout, LayoutRegistry};
pub use loader::{LazyCache, Loader};
pub use route::{RouteEntry, RouteTable, View};
pub use router::{NavStatus, ResolvedRoute, Router, RouterSnapshot};
