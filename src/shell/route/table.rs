use std::collections::{BTreeSet, HashSet};

use dioxus_logger::tracing;

use crate::shell::{
    error::ConfigError,
    layout::Layout,
    route::{RouteEntry, View},
};

/// Routes served by the application, in match order.
///
/// The name "Slide" is bound to both `/` and `/slide`. Route names are meant to be unique,
/// [`RouteTable::validate`] reports the duplicate as a warning but keeps both routes.
const DEFAULT_ROUTES: [RouteEntry; 3] = [
    RouteEntry {
        path: "/",
        name: "Slide",
        layout: Layout::Default,
        view: View::SlideShow,
    },
    RouteEntry {
        path: "/about",
        name: "About",
        layout: Layout::Auth,
        view: View::About,
    },
    RouteEntry {
        path: "/slide",
        name: "Slide",
        layout: Layout::Default,
        view: View::SlideShow,
    },
];

/// Ordered, immutable list of routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Create a table from entries in match order
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    /// All entries in match order
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Find the route for `path`.
    ///
    /// Paths are compared literally and the first matching entry wins. There is no catch-all
    /// entry, so any path not listed returns `None`.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// Path of the first route named `name`
    pub fn path_of(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.path)
    }

    /// Layouts referenced by any route
    pub fn layouts(&self) -> BTreeSet<Layout> {
        self.entries.iter().map(|entry| entry.layout).collect()
    }

    /// Check the table against the registered layouts.
    ///
    /// # Returns
    /// - `Ok(())` - Every path is unique and every layout is registered
    /// - `Err(ConfigError::DuplicatePath)` - A path appears more than once
    /// - `Err(ConfigError::UnregisteredLayout)` - A route uses a layout that is not registered
    pub fn validate(&self, registered: &BTreeSet<Layout>) -> Result<(), ConfigError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for entry in &self.entries {
            if !paths.insert(entry.path) {
                return Err(ConfigError::DuplicatePath(entry.path));
            }

            if !registered.contains(&entry.layout) {
                return Err(ConfigError::UnregisteredLayout {
                    route: entry.path,
                    layout: entry.layout,
                });
            }

            if !names.insert(entry.name) {
                tracing::warn!(
                    "Route name {:?} is used by more than one path, named lookups resolve to the first",
                    entry.name
                );
            }
        }

        Ok(())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(DEFAULT_ROUTES.to_vec())
    }
}
