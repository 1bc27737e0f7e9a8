//! One-shot application wiring.
//!
//! Startup runs in a fixed order, each step consuming the result of the previous one:
//!
//! 1. [`Bootstrap::new`] constructs the application from its [`Config`]
//! 2. [`Bootstrap::register_layouts`] registers the layout components by name
//! 3. [`Bootstrap::install_routes`] installs and validates the route table, producing a [`Shell`]
//! 4. [`Shell::mount`] attaches the application to its [`Host`]
//!
//! Any failure aborts startup, there is no partial startup.

use std::collections::BTreeSet;
use std::rc::Rc;

use dioxus_logger::tracing;

use crate::shell::{
    config::Config,
    error::{ConfigError, Error, MountError},
    layout::{Layout, LayoutRegistry},
    loader::Loader,
    route::{RouteTable, View},
    router::Router,
};

/// Component names of the layouts registered at startup
pub const LAYOUT_COMPONENTS: [&str; 2] = ["auth-layout", "default-layout"];

/// Target the application is mounted into.
pub trait Host {
    /// Whether the host page has an element with id `anchor_id`
    fn has_anchor(&self, anchor_id: &str) -> bool;

    /// Attach `shell` to the element with id `anchor_id`.
    ///
    /// Only called once [`Host::has_anchor`] confirmed the element exists.
    fn attach(&self, anchor_id: &str, shell: Shell) -> Result<(), MountError>;
}

/// Application under construction.
pub struct Bootstrap {
    config: Config,
    layouts: BTreeSet<Layout>,
}

impl Bootstrap {
    /// Construct the application instance
    pub fn new(config: Config) -> Self {
        tracing::info!("Constructing application (base path {:?})", config.base_path);

        Self {
            config,
            layouts: BTreeSet::new(),
        }
    }

    /// Register layout components by name.
    ///
    /// # Returns
    /// - `Ok(Bootstrap)` - Every name belongs to a known layout
    /// - `Err(ConfigError::UnknownLayout)` - A name matches no layout
    pub fn register_layouts<'a>(
        mut self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, ConfigError> {
        for name in names {
            let layout = Layout::from_component_name(name)?;
            tracing::debug!("Registered layout component {}", name);
            self.layouts.insert(layout);
        }

        Ok(self)
    }

    /// Install the route table.
    ///
    /// The table is validated against the registered layouts, a route using a layout which was
    /// never registered fails here rather than at render time.
    pub fn install_routes(self, table: RouteTable) -> Result<Shell, ConfigError> {
        table.validate(&self.layouts)?;
        tracing::info!("Installed {} routes", table.entries().len());

        Ok(Shell {
            config: self.config,
            layouts: self.layouts,
            table,
        })
    }
}

/// Run the startup sequence with the standard layouts and route table
pub fn bootstrap(config: Config) -> Result<Shell, Error> {
    let shell = Bootstrap::new(config)
        .register_layouts(LAYOUT_COMPONENTS)?
        .install_routes(RouteTable::default())?;

    Ok(shell)
}

/// Fully configured application, ready to be mounted.
///
/// The shell is plain data and can be handed across threads to the rendering layer, which
/// builds its single-threaded [`Router`] from it.
#[derive(Debug, Clone)]
pub struct Shell {
    config: Config,
    layouts: BTreeSet<Layout>,
    table: RouteTable,
}

impl Shell {
    /// Configuration the application was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Installed route table
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Registered layouts
    pub fn layouts(&self) -> &BTreeSet<Layout> {
        &self.layouts
    }

    /// Attach the application to `host` at the configured anchor.
    ///
    /// # Returns
    /// - `Ok(())` - The application is running in `host`
    /// - `Err(MountError::InvalidAnchor)` - The anchor id cannot name an element
    /// - `Err(MountError::MissingAnchor)` - The host page has no element with the anchor id
    pub fn mount(self, host: &impl Host) -> Result<(), MountError> {
        let anchor = self.config.mount_anchor.clone();

        if anchor.is_empty() || anchor.chars().any(|c| c == '#' || c.is_whitespace()) {
            return Err(MountError::InvalidAnchor(anchor));
        }

        if !host.has_anchor(&anchor) {
            return Err(MountError::MissingAnchor(anchor));
        }

        host.attach(&anchor, self)?;
        tracing::info!("Mounted application at #{}", anchor);

        Ok(())
    }

    /// Build the router serving this shell's routes.
    ///
    /// The router starts out resolving `initial_path`, the URL the application was opened at.
    pub fn router<V, L>(
        &self,
        views: Rc<dyn Loader<View, V>>,
        layouts: Rc<dyn Loader<Layout, L>>,
        initial_path: &str,
    ) -> Router<V, L>
    where
        V: Clone + 'static,
        L: Clone + 'static,
    {
        let layouts = LayoutRegistry::with_layouts(layouts, self.layouts.iter().copied());

        Router::new(
            self.table.clone(),
            self.config.base_path.clone(),
            views,
            layouts,
        )
        .opened_at(initial_path)
    }
}
