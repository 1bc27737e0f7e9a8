pub mod builder;
pub mod error;
pub mod host;
pub mod loader;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use host::FakeHost;
pub use loader::MockLoader;
pub use model::{Module, TestModule};
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{FakeHost, MockLoader, TestBuilder, TestError, TestModule, TestSetup};
}
