//! Tests for Shell::mount

use slideshow::shell::{
    bootstrap::bootstrap,
    config::{Config, DEFAULT_MOUNT_ANCHOR},
    error::MountError,
};
use slideshow_test_utils::prelude::*;

/// Tests mounting into a host page that has the anchor element.
///
/// Expected: the shell is attached once at #app
#[test]
fn mounts_at_configured_anchor() {
    let host = FakeHost::with_anchor(DEFAULT_MOUNT_ANCHOR);
    let shell = bootstrap(Config::default()).unwrap();

    shell.mount(&host).expect("mount should succeed");

    assert_eq!(host.mounted_at(), vec!["app".to_string()]);
    let mounted = host.last_mounted().unwrap();
    assert_eq!(mounted.table().entries().len(), 3);
}

/// Tests mounting into a host page without the anchor element.
///
/// Expected: MissingAnchor, nothing mounted
#[test]
fn fails_when_anchor_is_missing() {
    let host = FakeHost::empty();
    let shell = bootstrap(Config::default()).unwrap();

    let result = shell.mount(&host);

    assert_eq!(result, Err(MountError::MissingAnchor("app".to_string())));
    assert!(host.mounted_at().is_empty());
}

/// Tests mounting with an anchor id that cannot name an element.
///
/// Expected: InvalidAnchor before the host is consulted
#[test]
fn rejects_malformed_anchor() {
    let host = FakeHost::with_anchor("#app");
    let config = Config {
        mount_anchor: "#app".to_string(),
        ..Config::default()
    };
    let shell = bootstrap(config).unwrap();

    let result = shell.mount(&host);

    assert_eq!(result, Err(MountError::InvalidAnchor("#app".to_string())));
    assert!(host.mounted_at().is_empty());
}

/// Tests a host page whose only element has a different id.
///
/// Expected: MissingAnchor naming the configured anchor, the host is never attached to
#[test]
fn checks_anchor_before_attaching() {
    let host = FakeHost::with_anchor("root");
    let shell = bootstrap(Config::default()).unwrap();

    let result = shell.mount(&host);

    assert_eq!(result, Err(MountError::MissingAnchor("app".to_string())));
    assert!(host.last_mounted().is_none());
}
