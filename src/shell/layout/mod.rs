//! Page layouts wrapping every view.

pub mod registry;

use std::fmt;
use std::str::FromStr;

use crate::shell::error::ConfigError;

pub use registry::LayoutRegistry;

/// The closed set of layouts a route can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layout {
    /// Framed layout without site navigation.
    Auth,
    /// Layout with the site navbar.
    Default,
}

impl Layout {
    /// Every layout, in declaration order
    pub const ALL: [Layout; 2] = [Layout::Auth, Layout::Default];

    /// Short identifier used in the route table
    pub fn name(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Default => "default",
        }
    }

    /// Name the layout component is registered under
    pub fn component_name(self) -> &'static str {
        match self {
            Self::Auth => "auth-layout",
            Self::Default => "default-layout",
        }
    }

    /// Look a layout up by its registered component name.
    ///
    /// # Returns
    /// - `Ok(Layout)` for `"auth-layout"` and `"default-layout"`
    /// - `Err(ConfigError::UnknownLayout)` for anything else
    pub fn from_component_name(name: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.component_name() == name)
            .ok_or_else(|| ConfigError::UnknownLayout(name.to_string()))
    }
}

impl FromStr for Layout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.name() == s)
            .ok_or_else(|| ConfigError::UnknownLayout(s.to_string()))
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
