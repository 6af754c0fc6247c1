// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use resolveit_domain::{Category, ComplaintStatus, Priority};

use super::{
    create_test_complaint_row, create_test_history_row, create_test_store, create_test_user,
};
use crate::{NewInternalNoteRow, PersistenceError, Store};

#[test]
fn test_insert_and_get_complaint_round_trip() {
    let mut store: Store = create_test_store();
    let user_id: i64 = create_test_user(&mut store, "filer@example.com");

    let complaint_id: i64 = store
        .insert_complaint(&create_test_complaint_row(user_id))
        .expect("Insert failed");
    assert!(complaint_id > 0);

    let complaint = store
        .get_complaint(complaint_id)
        .expect("Query failed")
        .expect("Complaint missing");

    assert_eq!(complaint.complaint_id, complaint_id);
    assert_eq!(complaint.title, "Invoice shows the wrong amount");
    assert_eq!(complaint.category, Category::Billing);
    assert_eq!(complaint.priority, Priority::Medium);
    assert_eq!(complaint.status, ComplaintStatus::Submitted);
    assert_eq!(complaint.user_id, user_id);
    assert_eq!(complaint.assigned_to, None);
    assert_eq!(complaint.resolved_at, None);
    assert_eq!(complaint.resolution, None);
}

#[test]
fn test_get_missing_complaint_returns_none() {
    let mut store: Store = create_test_store();

    let result = store.get_complaint(9999).expect("Query failed");
    assert!(result.is_none());
}

#[test]
fn test_update_complaint_writes_mutable_columns() {
    let mut store: Store = create_test_store();
    let user_id: i64 = create_test_user(&mut store, "filer@example.com");
    let staff_id: i64 = create_test_user(&mut store, "staff@example.com");

    let complaint_id: i64 = store
        .insert_complaint(&create_test_complaint_row(user_id))
        .expect("Insert failed");

    let mut complaint = store
        .get_complaint(complaint_id)
        .expect("Query failed")
        .expect("Complaint missing");

    complaint.status = ComplaintStatus::Resolved;
    complaint.assigned_to = Some(staff_id);
    complaint.updated_at = String::from("2026-08-07T11:00:00.000000000Z");
    complaint.resolved_at = Some(String::from("2026-08-07T11:00:00.000000000Z"));
    complaint.resolution = Some(String::from("Refund issued"));

    store.update_complaint(&complaint).expect("Update failed");

    let reloaded = store
        .get_complaint(complaint_id)
        .expect("Query failed")
        .expect("Complaint missing");

    assert_eq!(reloaded.status, ComplaintStatus::Resolved);
    assert_eq!(reloaded.assigned_to, Some(staff_id));
    assert_eq!(reloaded.updated_at, "2026-08-07T11:00:00.000000000Z");
    assert_eq!(
        reloaded.resolved_at.as_deref(),
        Some("2026-08-07T11:00:00.000000000Z")
    );
    assert_eq!(reloaded.resolution.as_deref(), Some("Refund issued"));
    // Creation columns stay put
    assert_eq!(reloaded.created_at, "2026-08-07T10:00:00.000000000Z");
}

#[test]
fn test_update_missing_complaint_is_not_found() {
    let mut store: Store = create_test_store();
    let user_id: i64 = create_test_user(&mut store, "filer@example.com");

    let complaint_id: i64 = store
        .insert_complaint(&create_test_complaint_row(user_id))
        .expect("Insert failed");
    let mut complaint = store
        .get_complaint(complaint_id)
        .expect("Query failed")
        .expect("Complaint missing");
    complaint.complaint_id = 9999;

    let result = store.update_complaint(&complaint);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_delete_complaint_cascades_to_history_and_notes() {
    let mut store: Store = create_test_store();
    let user_id: i64 = create_test_user(&mut store, "filer@example.com");

    let complaint_id: i64 = store
        .insert_complaint(&create_test_complaint_row(user_id))
        .expect("Insert failed");

    store
        .insert_status_history(&create_test_history_row(complaint_id, user_id))
        .expect("History insert failed");
    store
        .insert_internal_note(&NewInternalNoteRow {
            complaint_id,
            note: String::from("Checked the billing system"),
            created_by: user_id,
            created_at: String::from("2026-08-07T10:05:00.000000000Z"),
            is_public: 0,
        })
        .expect("Note insert failed");

    let removed: usize = store.delete_complaint(complaint_id).expect("Delete failed");
    assert_eq!(removed, 1);

    assert!(
        store
            .get_complaint(complaint_id)
            .expect("Query failed")
            .is_none()
    );
    assert!(
        store
            .list_status_history(complaint_id)
            .expect("Query failed")
            .is_empty()
    );
    assert!(
        store
            .list_internal_notes(complaint_id, false)
            .expect("Query failed")
            .is_empty()
    );
}

#[test]
fn test_delete_missing_complaint_is_noop() {
    let mut store: Store = create_test_store();

    let removed: usize = store.delete_complaint(4242).expect("Delete failed");
    assert_eq!(removed, 0);
}

#[test]
fn test_duplicate_user_email_rejected() {
    let mut store: Store = create_test_store();
    create_test_user(&mut store, "dup@example.com");

    let result = store.insert_user(&crate::NewUserRow {
        first_name: String::from("Other"),
        last_name: String::from("Person"),
        email: String::from("dup@example.com"),
        role: String::from("staff"),
    });
    assert!(result.is_err());
}

#[test]
fn test_user_round_trip_and_lookup_by_email() {
    let mut store: Store = create_test_store();
    let user_id: i64 = create_test_user(&mut store, "lookup@example.com");

    let by_id = store
        .get_user(user_id)
        .expect("Query failed")
        .expect("User missing");
    assert_eq!(by_id.email, "lookup@example.com");

    let by_email = store
        .get_user_by_email("lookup@example.com")
        .expect("Query failed")
        .expect("User missing");
    assert_eq!(by_email.user_id, user_id);

    assert!(
        store
            .get_user_by_email("nobody@example.com")
            .expect("Query failed")
            .is_none()
    );
}
