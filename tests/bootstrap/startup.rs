//! Tests for the bootstrap sequence up to a configured shell.
//!
//! These tests verify:
//! - The standard layouts and routes bootstrap cleanly
//! - Unknown layout names are rejected at startup
//! - Routes using an unregistered layout are rejected at startup
//! - Invalid base paths are rejected at startup

use slideshow::shell::{
    bootstrap::bootstrap,
    config::Config,
    error::{ConfigError, Error},
    Layout, RouteEntry, RouteTable, View,
};
use slideshow_test_utils::prelude::*;

/// Tests bootstrapping the standard application.
///
/// Expected: both layouts registered, three routes installed, router idle
#[test]
fn bootstraps_standard_application() {
    let setup = TestBuilder::new().build().expect("standard bootstrap");

    assert_eq!(
        setup.shell.layouts().iter().copied().collect::<Vec<_>>(),
        vec![Layout::Auth, Layout::Default]
    );
    assert_eq!(setup.shell.table().entries().len(), 3);
    assert_eq!(setup.shell.config().base_path, "");
    assert!(setup.router.current().is_none());
}

/// Tests that every route's layout is registered after bootstrap.
///
/// Expected: no route references a missing layout
#[test]
fn every_route_layout_is_registered() {
    let shell = bootstrap(Config::default()).expect("standard bootstrap");

    for entry in shell.table().entries() {
        assert!(
            shell.layouts().contains(&entry.layout),
            "Route {} uses unregistered layout {}",
            entry.path,
            entry.layout
        );
    }
}

/// Tests registering a layout name outside the known set.
///
/// Expected: UnknownLayout configuration error
#[test]
fn rejects_unknown_layout_name() {
    let result = TestBuilder::new()
        .with_layout_names(&["auth-layout", "sidebar-layout"])
        .build();

    assert!(matches!(
        result,
        Err(TestError::ConfigError(ConfigError::UnknownLayout(ref name))) if name == "sidebar-layout"
    ));
}

/// Tests installing routes when one of their layouts was not registered.
///
/// Expected: UnregisteredLayout configuration error naming the route
#[test]
fn rejects_route_with_unregistered_layout() {
    let result = TestBuilder::new()
        .with_layout_names(&["default-layout"])
        .build();

    assert!(matches!(
        result,
        Err(TestError::ConfigError(ConfigError::UnregisteredLayout {
            route: "/about",
            layout: Layout::Auth,
        }))
    ));
}

/// Tests a custom table that only uses registered layouts.
///
/// Expected: bootstrap succeeds with only the default layout registered
#[test]
fn accepts_table_using_registered_layouts_only() {
    let table = RouteTable::new(vec![RouteEntry {
        path: "/",
        name: "Slide",
        layout: Layout::Default,
        view: View::SlideShow,
    }]);

    let result = TestBuilder::new()
        .with_layout_names(&["default-layout"])
        .with_routes(table)
        .build();

    assert!(result.is_ok());
}

/// Tests an unusable BASE_URL value.
///
/// Expected: InvalidEnvValue configuration error
#[test]
fn rejects_invalid_base_url() {
    let result = TestBuilder::new().with_base_url("/deck#top").build();

    assert!(matches!(
        result,
        Err(TestError::ConfigError(ConfigError::InvalidEnvValue { .. }))
    ));
}

/// Tests that configuration errors convert into the aggregate error.
///
/// Expected: Error::ConfigError wrapping the original
#[test]
fn config_errors_convert_into_shell_error() {
    let error: Error = ConfigError::UnknownLayout("x".to_string()).into();

    assert!(matches!(error, Error::ConfigError(ConfigError::UnknownLayout(_))));
    assert_eq!(error.to_string(), "Unknown layout: \"x\"");
}
