//! Declarative test builder.
//!
//! `TestBuilder` collects the configuration of a test application, then runs the real
//! bootstrap sequence in `build()` and wires the resulting router to [`MockLoader`]s.

use slideshow::shell::{
    config::{Config, BASE_URL_VAR},
    error::LoadError,
    Bootstrap, Layout, RouteTable, View, LAYOUT_COMPONENTS,
};

use crate::{error::TestError, loader::MockLoader, setup::TestSetup};

/// Builder for bootstrapped test applications.
pub struct TestBuilder {
    base_url: Option<String>,
    initial_path: String,
    layout_names: Vec<String>,
    table: RouteTable,

    gated_views: Vec<View>,
    gated_layouts: Vec<Layout>,
    failing_views: Vec<(View, LoadError)>,
    failing_layouts: Vec<(Layout, LoadError)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a builder using the standard layouts and route table.
    ///
    /// # Returns
    /// - `TestBuilder` - Builder where every view and layout loads immediately
    pub fn new() -> Self {
        Self {
            base_url: None,
            initial_path: "/".to_string(),
            layout_names: LAYOUT_COMPONENTS.iter().map(|s| s.to_string()).collect(),
            table: RouteTable::default(),
            gated_views: Vec::new(),
            gated_layouts: Vec::new(),
            failing_views: Vec::new(),
            failing_layouts: Vec::new(),
        }
    }

    /// Use `base_url` as the raw `BASE_URL` environment value
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    /// Open the application at `path` instead of `/`
    pub fn with_initial_path(mut self, path: &str) -> Self {
        self.initial_path = path.to_string();
        self
    }

    /// Register these layout component names instead of the standard ones
    pub fn with_layout_names(mut self, names: &[&str]) -> Self {
        self.layout_names = names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Install `table` instead of the standard routes
    pub fn with_routes(mut self, table: RouteTable) -> Self {
        self.table = table;
        self
    }

    /// Hold loads of `view` until released through [`TestSetup::views`]
    pub fn gate_view(mut self, view: View) -> Self {
        self.gated_views.push(view);
        self
    }

    /// Hold loads of `layout` until released through [`TestSetup::layouts`]
    pub fn gate_layout(mut self, layout: Layout) -> Self {
        self.gated_layouts.push(layout);
        self
    }

    /// Make loads of `view` fail with `error`
    pub fn fail_view(mut self, view: View, error: LoadError) -> Self {
        self.failing_views.push((view, error));
        self
    }

    /// Make loads of `layout` fail with `error`
    pub fn fail_layout(mut self, layout: Layout, error: LoadError) -> Self {
        self.failing_layouts.push((layout, error));
        self
    }

    /// Run the bootstrap sequence and build the router.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Application ready for navigation
    /// - `Err(TestError)` - Bootstrap rejected the configuration
    pub fn build(self) -> Result<TestSetup, TestError> {
        let base_url = self.base_url;
        let config = Config::from_lookup(|key| match key {
            BASE_URL_VAR => base_url.clone(),
            _ => None,
        })?;

        let shell = Bootstrap::new(config)
            .register_layouts(self.layout_names.iter().map(String::as_str))?
            .install_routes(self.table)?;

        let views = MockLoader::new();
        for view in self.gated_views {
            views.gate(view);
        }
        for (view, error) in self.failing_views {
            views.fail(view, error);
        }

        let layouts = MockLoader::new();
        for layout in self.gated_layouts {
            layouts.gate(layout);
        }
        for (layout, error) in self.failing_layouts {
            layouts.fail(layout, error);
        }

        let router = shell.router(views.as_loader(), layouts.as_loader(), &self.initial_path);

        Ok(TestSetup {
            shell,
            router,
            views,
            layouts,
        })
    }
}
