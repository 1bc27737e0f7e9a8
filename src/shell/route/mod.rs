//! Navigable routes and the views they render.

pub mod table;

use std::fmt;

use crate::shell::layout::Layout;

pub use table::RouteTable;

/// The closed set of page views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum View {
    /// The slide deck.
    SlideShow,
    /// Information about the deck.
    About,
}

impl View {
    /// Every view, in declaration order
    pub const ALL: [View; 2] = [View::SlideShow, View::About];

    /// Module name of the view
    pub fn name(self) -> &'static str {
        match self {
            Self::SlideShow => "SlideShow",
            Self::About => "About",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One navigable path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// Literal path, unique within a table.
    pub path: &'static str,
    /// Route name.
    pub name: &'static str,
    /// Layout wrapping the view.
    pub layout: Layout,
    /// View rendered for the path.
    pub view: View,
}
