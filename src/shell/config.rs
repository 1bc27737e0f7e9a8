//! Environment-driven application configuration.

use crate::shell::error::ConfigError;

/// Environment variable holding the base path of the routing history
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Id of the host page element the application mounts into
pub const DEFAULT_MOUNT_ANCHOR: &str = "app";

/// Application configuration, read once at bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Normalized base path, either empty or starting with `/` and without a trailing `/`.
    pub base_path: String,
    /// Id of the element the application is mounted into.
    pub mount_anchor: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// `BASE_URL` is looked up at runtime first and falls back to the value present when the
    /// crate was compiled, which is the only source available in the browser.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            std::env::var(key).ok().or_else(|| match key {
                BASE_URL_VAR => option_env!("BASE_URL").map(str::to_string),
                _ => None,
            })
        })
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_path = match lookup(BASE_URL_VAR) {
            Some(raw) => normalize_base_path(&raw)?,
            None => String::new(),
        };

        Ok(Self {
            base_path,
            mount_anchor: DEFAULT_MOUNT_ANCHOR.to_string(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            mount_anchor: DEFAULT_MOUNT_ANCHOR.to_string(),
        }
    }
}

fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed
        .chars()
        .any(|c| c == '?' || c == '#' || c.is_whitespace())
    {
        return Err(ConfigError::InvalidEnvValue {
            var: BASE_URL_VAR.to_string(),
            reason: format!("{trimmed:?} must be a plain path"),
        });
    }

    let inner = trimmed.trim_matches('/');
    if inner.is_empty() {
        return Ok(String::new());
    }

    Ok(format!("/{inner}"))
}

/// Strip `base_path` from the front of `path`.
///
/// Returns `None` when `path` lies outside of the base path.
pub fn strip_base<'a>(base_path: &str, path: &'a str) -> Option<&'a str> {
    if base_path.is_empty() {
        return Some(path);
    }

    match path.strip_prefix(base_path) {
        Some("") => Some("/"),
        Some(rest) if rest.starts_with('/') => Some(rest),
        _ => None,
    }
}

/// Anchor path segments reported relative to the base path under `base_path`.
///
/// The routing history strips the base path before matching, the router expects the full
/// path, so this is the inverse of [`strip_base`].
pub fn join_base<S: AsRef<str>>(base_path: &str, segments: &[S]) -> String {
    let relative = segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("/");

    format!("{base_path}/{relative}")
}
