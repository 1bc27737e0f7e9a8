//! Tests for overlapping navigations.
//!
//! These tests verify that only the most recently issued navigation changes the visible
//! route, regardless of the order in which the loads complete. Navigations start their loads
//! when issued, so the tests control completion order by releasing gated views.

use slideshow::shell::{error::NavigationError, Layout, NavStatus, View};
use slideshow_test_utils::prelude::*;

/// Tests an earlier navigation whose view arrives after the later one.
///
/// Expected: final state shows /about, the / navigation is reported as superseded
#[tokio::test]
async fn later_navigation_wins_when_earlier_completes_last() {
    let setup = TestBuilder::new()
        .gate_view(View::SlideShow)
        .gate_view(View::About)
        .build()
        .unwrap();

    let to_root = setup.router.navigate("/");
    let to_about = setup.router.navigate("/about");
    assert_eq!(setup.views.pending(View::SlideShow), 1);
    assert_eq!(setup.views.pending(View::About), 1);

    setup.views.release(View::About);
    let about = to_about.await.unwrap();
    assert_eq!(about.entry.path, "/about");

    setup.views.release(View::SlideShow);
    let root = to_root.await;

    assert_eq!(root.unwrap_err(), NavigationError::Superseded("/".to_string()));
    assert_eq!(setup.router.status(), NavStatus::Resolved);
    assert_eq!(setup.router.current().unwrap().entry.path, "/about");
}

/// Tests an earlier navigation whose view arrives before the later one.
///
/// Expected: the earlier result is discarded even though it finished first
#[tokio::test]
async fn earlier_result_is_discarded_when_it_completes_first() {
    let setup = TestBuilder::new()
        .gate_view(View::SlideShow)
        .gate_view(View::About)
        .build()
        .unwrap();

    let to_root = setup.router.navigate("/");
    let to_about = setup.router.navigate("/about");

    setup.views.release(View::SlideShow);
    let root = to_root.await;

    assert_eq!(root.unwrap_err(), NavigationError::Superseded("/".to_string()));
    assert!(
        setup.router.current().is_none(),
        "A superseded navigation must not change the visible route"
    );
    assert_eq!(
        setup.router.status(),
        NavStatus::Resolving {
            path: "/about".to_string()
        }
    );

    setup.views.release(View::About);

    assert_eq!(to_about.await.unwrap().entry.path, "/about");
    assert_eq!(setup.router.current().unwrap().entry.view, View::About);
}

/// Tests that a superseded navigation still warms the cache.
///
/// Expected: the discarded load is kept and navigating back does not fetch again
#[tokio::test]
async fn superseded_load_is_still_cached() {
    let setup = TestBuilder::new().gate_view(View::SlideShow).build().unwrap();

    let to_root = setup.router.navigate("/");
    let to_about = setup.router.navigate("/about");

    setup.views.release(View::SlideShow);
    assert!(to_root.await.is_err());
    assert!(to_about.await.is_ok());

    setup.navigate_names("/slide").await;

    assert_eq!(setup.views.calls(View::SlideShow), 1);
    assert_eq!(setup.layouts.calls(Layout::Default), 1);
}

/// Tests a later navigation to a missing path.
///
/// Expected: the pending navigation is superseded and the miss stays the final state
#[tokio::test]
async fn miss_supersedes_pending_navigation() {
    let setup = TestBuilder::new().gate_view(View::About).build().unwrap();

    let to_about = setup.router.navigate("/about");
    let to_missing = setup.router.navigate("/missing");

    assert!(matches!(to_missing.await, Err(NavigationError::NotFound(_))));

    setup.views.release(View::About);

    assert_eq!(
        to_about.await.unwrap_err(),
        NavigationError::Superseded("/about".to_string())
    );
    assert_eq!(
        setup.router.status(),
        NavStatus::NotFound {
            path: "/missing".to_string()
        }
    );
    assert!(setup.router.current().is_none());
}

/// Tests navigating to the same path twice while its view is loading.
///
/// Expected: one fetch, the second navigation wins
#[tokio::test]
async fn repeated_navigation_shares_fetch() {
    let setup = TestBuilder::new().gate_view(View::About).build().unwrap();

    let first = setup.router.navigate("/about");
    let second = setup.router.navigate("/about");

    assert_eq!(setup.views.release(View::About), 1);
    assert_eq!(
        first.await.unwrap_err(),
        NavigationError::Superseded("/about".to_string())
    );
    assert!(second.await.is_ok());
    assert_eq!(setup.views.calls(View::About), 1);
}
