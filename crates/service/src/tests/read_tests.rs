// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use resolveit_domain::{Category, ComplaintDraft, ComplaintStatus, Priority};

use super::{
    RecordingNotifier, billing_draft, create_test_service, create_test_store, seed_user,
};
use crate::{ComplaintFilter, PageRequest};

#[test]
fn test_find_by_id_returns_none_for_missing_complaint() {
    let notifier = Arc::new(RecordingNotifier::default());
    let service = create_test_service(&notifier);
    let mut store = create_test_store();

    let found = service.find_by_id(&mut store, 123).expect("Query failed");
    assert!(found.is_none());
}

#[test]
fn test_list_and_count_through_the_manager() {
    let notifier = Arc::new(RecordingNotifier::default());
    let service = create_test_service(&notifier);
    let mut store = create_test_store();
    let filer = seed_user(&mut store, "Alice", "alice@example.com", "user");
    let staff = seed_user(&mut store, "Sam", "sam@example.com", "staff");

    service
        .create(&mut store, billing_draft(), &filer)
        .expect("Create failed");
    let second = service
        .create(
            &mut store,
            ComplaintDraft {
                title: String::from("App crashes on startup"),
                description: String::from("Crashes immediately after the splash screen."),
                category: Category::Technical,
                priority: Priority::High,
            },
            &filer,
        )
        .expect("Create failed");
    service
        .assign(&mut store, second.complaint_id, &staff, &staff)
        .expect("Assign failed");

    let all = service
        .list(&mut store, &ComplaintFilter::All, PageRequest::default())
        .expect("List failed");
    assert_eq!(all.total, 2);

    let assigned = service
        .list(
            &mut store,
            &ComplaintFilter::ByAssignee(staff.user_id),
            PageRequest::default(),
        )
        .expect("List failed");
    assert_eq!(assigned.total, 1);
    assert_eq!(assigned.items[0].complaint_id, second.complaint_id);

    assert_eq!(
        service
            .count_by_status(&mut store, ComplaintStatus::Submitted)
            .expect("Count failed"),
        1
    );

    let mut by_category = service
        .count_grouped_by_category(&mut store)
        .expect("Count failed");
    by_category.sort_by_key(|(category, _)| category.as_str());
    assert_eq!(
        by_category,
        vec![(Category::Billing, 1), (Category::Technical, 1)]
    );
}

#[test]
fn test_search_through_the_manager() {
    let notifier = Arc::new(RecordingNotifier::default());
    let service = create_test_service(&notifier);
    let mut store = create_test_store();
    let filer = seed_user(&mut store, "Alice", "alice@example.com", "user");

    service
        .create(&mut store, billing_draft(), &filer)
        .expect("Create failed");

    let hits = service
        .search(&mut store, "charges", PageRequest::default())
        .expect("Search failed");
    assert_eq!(hits.total, 1);

    let misses = service
        .search(&mut store, "wifi", PageRequest::default())
        .expect("Search failed");
    assert_eq!(misses.total, 0);
}

#[test]
fn test_delete_removes_complaint_and_children() {
    let notifier = Arc::new(RecordingNotifier::default());
    let service = create_test_service(&notifier);
    let mut store = create_test_store();
    let filer = seed_user(&mut store, "Alice", "alice@example.com", "user");
    let staff = seed_user(&mut store, "Sam", "sam@example.com", "staff");

    let complaint = service
        .create(&mut store, billing_draft(), &filer)
        .expect("Create failed");
    service
        .add_note(&mut store, complaint.complaint_id, "note", &staff, false)
        .expect("Add note failed");

    service
        .delete(&mut store, complaint.complaint_id)
        .expect("Delete failed");

    assert!(
        service
            .find_by_id(&mut store, complaint.complaint_id)
            .expect("Query failed")
            .is_none()
    );
    assert!(
        service
            .history(&mut store, complaint.complaint_id)
            .expect("Query failed")
            .is_empty()
    );
    assert!(
        service
            .notes(&mut store, complaint.complaint_id, false)
            .expect("Query failed")
            .is_empty()
    );

    // Deleting again is a no-op
    service
        .delete(&mut store, complaint.complaint_id)
        .expect("Second delete failed");
}
