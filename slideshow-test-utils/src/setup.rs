use slideshow::shell::{Layout, Router, Shell, View};

use crate::{loader::MockLoader, model::TestModule};

/// Bootstrapped application with scriptable loaders.
pub struct TestSetup {
    pub shell: Shell,
    pub router: Router<TestModule, TestModule>,
    pub views: MockLoader<View>,
    pub layouts: MockLoader<Layout>,
}

impl TestSetup {
    /// Navigate and return the name of the resulting view and layout modules.
    ///
    /// Panics when the navigation does not resolve.
    pub async fn navigate_names(&self, path: &str) -> (String, String) {
        let resolved = self
            .router
            .navigate(path)
            .await
            .unwrap_or_else(|err| panic!("navigation to {path} failed: {err}"));

        (resolved.view.name.clone(), resolved.layout.name.clone())
    }
}
