#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn refresh_is_noop_but_callable() {
    refresh();
    refresh();
}

#[test]
fn script_source_points_at_lucide() {
    assert!(LUCIDE_SCRIPT_SRC.starts_with("https://"));
    assert!(LUCIDE_SCRIPT_SRC.contains("lucide"));
}

#[test]
fn script_source_is_version_pinned() {
    assert!(!LUCIDE_SCRIPT_SRC.contains("@latest"));
    assert!(LUCIDE_SCRIPT_SRC.contains("lucide@0.460.0/"));
}
