//! Tests for layout resolution through the router's layout registry.
//!
//! These tests verify:
//! - Layout components are memoized per layout
//! - Concurrent resolutions of an unloaded layout share one fetch
//! - Navigations share the layout cache
//! - Layouts outside the registered set are rejected without a fetch

use std::rc::Rc;

use slideshow::shell::{error::LoadError, Layout, RouteEntry, RouteTable, View};
use slideshow_test_utils::prelude::*;

/// Tests resolving the same layout twice.
///
/// Expected: the same instance, one fetch
#[tokio::test]
async fn resolving_twice_returns_same_instance() {
    let setup = TestBuilder::new().build().unwrap();

    let first = setup.router.resolve_layout(Layout::Auth).await.unwrap();
    let second = setup.router.resolve_layout(Layout::Auth).await.unwrap();

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(first.name, "auth");
    assert_eq!(setup.layouts.calls(Layout::Auth), 1);
}

/// Tests concurrent resolutions while the fetch is still pending.
///
/// Expected: one fetch shared by every caller
#[tokio::test]
async fn concurrent_resolutions_coalesce() {
    let setup = TestBuilder::new().gate_layout(Layout::Default).build().unwrap();

    let resolutions: Vec<_> = (0..5)
        .map(|_| setup.router.resolve_layout(Layout::Default))
        .collect();
    let released = setup.layouts.release(Layout::Default);
    let results = futures::future::join_all(resolutions).await;

    assert_eq!(released, 1, "Only one fetch should be pending");
    assert_eq!(setup.layouts.calls(Layout::Default), 1);

    let first = results[0].as_ref().unwrap();
    for result in &results {
        assert!(Rc::ptr_eq(first, result.as_ref().unwrap()));
    }
}

/// Tests that navigation reuses layouts loaded earlier.
///
/// Expected: /slide after / does not fetch the default layout again
#[tokio::test]
async fn navigations_share_layout_cache() {
    let setup = TestBuilder::new().build().unwrap();

    let root = setup.router.navigate("/").await.unwrap();
    let slide = setup.router.navigate("/slide").await.unwrap();

    assert!(Rc::ptr_eq(&root.layout, &slide.layout));
    assert!(Rc::ptr_eq(&root.view, &slide.view), "Both paths render the same view");
    assert_eq!(setup.layouts.calls(Layout::Default), 1);
    assert_eq!(setup.layouts.calls(Layout::Auth), 0, "Auth layout is never needed");
}

/// Tests resolving a layout that was not registered at bootstrap.
///
/// Expected: Unregistered error, the layout is never fetched or cached
#[tokio::test]
async fn unregistered_layout_is_rejected() {
    let table = RouteTable::new(vec![RouteEntry {
        path: "/",
        name: "Slide",
        layout: Layout::Default,
        view: View::SlideShow,
    }]);
    let setup = TestBuilder::new()
        .with_layout_names(&["default-layout"])
        .with_routes(table)
        .build()
        .unwrap();

    let result = setup.router.resolve_layout(Layout::Auth).await;

    assert_eq!(
        result.unwrap_err(),
        LoadError::Unregistered {
            module: "auth-layout".to_string()
        }
    );
    assert_eq!(setup.layouts.calls(Layout::Auth), 0);
    assert!(setup.router.resolve_layout(Layout::Default).await.is_ok());
}
