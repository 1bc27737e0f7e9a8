pub mod app;
pub mod components;
pub mod host;
pub mod loader;
pub mod router;
pub mod routes;

use std::rc::Rc;

use slideshow::shell::{Router, RouterSnapshot};

use crate::client::loader::{LayoutModule, ViewModule};

pub use app::App;
pub use host::DioxusHost;

/// Router shared with every component through context
pub type AppRouter = Rc<Router<ViewModule, LayoutModule>>;

/// Router state mirrored into a signal for rendering
pub type AppSnapshot = RouterSnapshot<ViewModule, LayoutModule>;
