use crate::page::{PageEvent, MSG_IDENTITY_REQUIRED, MSG_SELECTION_REQUIRED, MSG_SUBMIT_SUCCESS};
use crate::persistence::{CellValue, MemoryStore, PersistenceError};
use crate::test_harness::TestDashboard;

#[test]
fn empty_name_is_rejected_without_store_call() {
    let mut dash = TestDashboard::with_agencies(&[("C", 500.0)]);
    dash.set_email("x@y.com").check("C").submit();

    let status = dash.view().status.as_ref().expect("status shown");
    assert!(status.is_error());
    assert_eq!(status.text(), MSG_IDENTITY_REQUIRED);
    assert_eq!(dash.row_count(), 0);
}

#[test]
fn empty_selection_is_rejected_without_store_call() {
    let mut dash = TestDashboard::with_agencies(&[("C", 500.0)]);
    dash.set_name("Ada").set_email("ada@example.com").submit();

    let status = dash.view().status.as_ref().expect("status shown");
    assert_eq!(status.text(), MSG_SELECTION_REQUIRED);
    assert_eq!(dash.row_count(), 0);
}

#[test]
fn valid_submission_appends_exactly_one_row() {
    let mut dash = TestDashboard::with_agencies(&[("C", 500.0), ("D", 20.0)]);
    dash.set_name("Ada")
        .set_email("ada@example.com")
        .check("C")
        .submit();

    assert_eq!(dash.row_count(), 1);
    let rows = dash.rows_appended();
    assert_eq!(
        rows[0],
        vec![
            CellValue::Text("Ada".into()),
            CellValue::Text("ada@example.com".into()),
            CellValue::Text("C".into()),
            CellValue::Number(500.0),
            CellValue::Number(1.49),
        ]
    );
    let status = dash.view().status.as_ref().expect("status shown");
    assert_eq!(status.text(), MSG_SUBMIT_SUCCESS);
}

#[test]
fn each_activation_submits_once() {
    let mut dash = TestDashboard::with_agencies(&[("C", 500.0)]);
    dash.set_name("Ada").set_email("ada@example.com").check("C");
    dash.submit();
    dash.idle(3);
    assert_eq!(dash.row_count(), 1);
    dash.submit();
    assert_eq!(dash.row_count(), 2);
}

#[test]
fn multi_agency_row_joins_names_in_catalogue_order() {
    let mut dash = TestDashboard::new();
    dash.set_name("Grace")
        .set_email("grace@example.com")
        .check("NASA")
        .check("Medicare")
        .submit();

    let rows = dash.rows_appended();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][2], CellValue::Text("Medicare, NASA".into()));
    assert_eq!(rows[0][3], CellValue::Number(850_900.0));
    assert_eq!(rows[0][4], CellValue::Number(2540.76));
}

#[test]
fn store_failure_is_surfaced_and_page_stays_usable() {
    let mut dash = TestDashboard::with_agencies(&[("A", 1000.0), ("B", 10.0)]).with_store(
        MemoryStore::failing(PersistenceError::Http {
            status: Some(503),
            message: "backend unavailable".into(),
        }),
    );
    dash.set_name("Ada").set_email("ada@example.com").check("A").submit();

    let status = dash.view().status.as_ref().expect("status shown");
    assert!(status.is_error());
    assert!(status.text().starts_with("Failed to save data:"));
    assert!(status.text().contains("503"));

    // Still interactive afterwards.
    dash.check("B");
    assert_eq!(dash.selection().len(), 2);
    assert!(dash.view().flow.is_some());
}

#[test]
fn submit_in_same_frame_sees_earlier_inputs() {
    let mut dash = TestDashboard::with_agencies(&[("C", 500.0)]);
    dash.send_batch([
        PageEvent::NameChanged("Ada".into()),
        PageEvent::EmailChanged("ada@example.com".into()),
        PageEvent::AgencyToggled {
            name: "C".into(),
            checked: true,
        },
        PageEvent::SubmitPressed,
    ]);
    assert_eq!(dash.row_count(), 1);
}

#[test]
fn status_persists_until_next_submit() {
    let mut dash = TestDashboard::with_agencies(&[("C", 500.0)]);
    dash.submit();
    assert_eq!(
        dash.view().status.as_ref().map(|s| s.text().to_string()),
        Some(MSG_IDENTITY_REQUIRED.to_string())
    );
    dash.set_name("Ada").set_email("ada@example.com");
    assert_eq!(
        dash.view().status.as_ref().map(|s| s.text().to_string()),
        Some(MSG_IDENTITY_REQUIRED.to_string())
    );
    dash.check("C").submit();
    assert_eq!(
        dash.view().status.as_ref().map(|s| s.text().to_string()),
        Some(MSG_SUBMIT_SUCCESS.to_string())
    );
}
