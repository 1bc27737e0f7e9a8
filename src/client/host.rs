use dioxus_logger::tracing;
use slideshow::shell::{config::join_base, error::MountError, Host, Shell};

use crate::client::App;

/// Mounts the application with the Dioxus launcher.
///
/// The [`Shell`] becomes a root context, [`App`] builds the router from it. On the web the
/// browser history is rooted at the configured base path, so routes and links stay relative
/// to it.
pub struct DioxusHost;

impl Host for DioxusHost {
    #[cfg(feature = "web")]
    fn has_anchor(&self, anchor_id: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(anchor_id))
            .is_some()
    }

    // Native windows create their own root element.
    #[cfg(not(feature = "web"))]
    fn has_anchor(&self, _anchor_id: &str) -> bool {
        true
    }

    fn attach(&self, anchor_id: &str, shell: Shell) -> Result<(), MountError> {
        tracing::info!("Launching application at #{}", anchor_id);

        #[cfg(feature = "web")]
        let web_config = {
            use std::rc::Rc;

            let base_path = shell.config().base_path.clone();
            let prefix = (!base_path.is_empty()).then_some(base_path);
            let history = dioxus::web::WebHistory::new(prefix, true);

            dioxus::web::Config::new()
                .rootname(anchor_id)
                .history(Rc::new(history))
        };

        let builder = dioxus::LaunchBuilder::new().with_context(shell);

        #[cfg(feature = "web")]
        let builder = builder.with_cfg(web_config);

        builder.launch(App);

        Ok(())
    }
}

/// Full path the application was opened at, including the base path
pub fn initial_path(base_path: &str) -> String {
    #[cfg(feature = "web")]
    let location = web_sys::window().and_then(|window| window.location().pathname().ok());
    #[cfg(not(feature = "web"))]
    let location: Option<String> = None;

    location.unwrap_or_else(|| join_base::<&str>(base_path, &[]))
}
