//! Integration tests for the dashboard using the `TestDashboard` harness.
//!
//! These tests spin up a headless Bevy App with `BudgetPlugin` and a
//! recording store, and drive it with page events the way the UI does.

mod submission_tests;

use crate::catalogue::BUILTIN_AGENCIES;
use crate::test_harness::TestDashboard;

// ===========================================================================
// Harness bootstrap
// ===========================================================================

#[test]
fn startup_derives_initial_view() {
    let dash = TestDashboard::new();
    assert_eq!(dash.view().rows.len(), BUILTIN_AGENCIES.len());
    assert_eq!(dash.view().overview.segments.len(), BUILTIN_AGENCIES.len());
    assert!(dash.view().summary.is_none());
    assert!(dash.view().flow.is_none());
    assert!(dash.selection().is_empty());
}

#[test]
fn idle_frames_change_nothing() {
    let mut dash = TestDashboard::new();
    let before = dash.view().clone();
    dash.idle(5);
    assert_eq!(*dash.view(), before);
    assert_eq!(dash.row_count(), 0);
}
