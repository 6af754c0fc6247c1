// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use resolveit_domain::{Category, ComplaintStatus, Priority};

use super::{create_test_complaint_row, create_test_store, create_test_user};
use crate::{ComplaintFilter, NewComplaintRow, NewInternalNoteRow, NewStatusHistoryRow, PageRequest, Store};

fn seed_complaint(
    store: &mut Store,
    user_id: i64,
    title: &str,
    category: Category,
    status: ComplaintStatus,
    created_at: &str,
) -> i64 {
    let row = NewComplaintRow {
        title: title.to_string(),
        category: category.as_str().to_string(),
        status: status.as_str().to_string(),
        created_at: created_at.to_string(),
        updated_at: created_at.to_string(),
        ..create_test_complaint_row(user_id)
    };
    store.insert_complaint(&row).expect("Insert failed")
}

#[test]
fn test_list_complaints_by_user_and_assignee() {
    let mut store: Store = create_test_store();
    let alice: i64 = create_test_user(&mut store, "alice@example.com");
    let bob: i64 = create_test_user(&mut store, "bob@example.com");
    let staff: i64 = create_test_user(&mut store, "staff@example.com");

    let c1 = seed_complaint(
        &mut store,
        alice,
        "Broken login",
        Category::Technical,
        ComplaintStatus::Submitted,
        "2026-08-01T09:00:00.000000000Z",
    );
    seed_complaint(
        &mut store,
        bob,
        "Late delivery",
        Category::Service,
        ComplaintStatus::Submitted,
        "2026-08-02T09:00:00.000000000Z",
    );

    let mut complaint = store
        .get_complaint(c1)
        .expect("Query failed")
        .expect("Complaint missing");
    complaint.assigned_to = Some(staff);
    store.update_complaint(&complaint).expect("Update failed");

    let by_alice = store
        .list_complaints(&ComplaintFilter::ByUser(alice), PageRequest::default())
        .expect("Query failed");
    assert_eq!(by_alice.total, 1);
    assert_eq!(by_alice.items[0].complaint_id, c1);

    let by_staff = store
        .list_complaints(&ComplaintFilter::ByAssignee(staff), PageRequest::default())
        .expect("Query failed");
    assert_eq!(by_staff.total, 1);
    assert_eq!(by_staff.items[0].complaint_id, c1);

    let all = store
        .list_complaints(&ComplaintFilter::All, PageRequest::default())
        .expect("Query failed");
    assert_eq!(all.total, 2);
}

#[test]
fn test_list_complaints_by_status_category_priority() {
    let mut store: Store = create_test_store();
    let user: i64 = create_test_user(&mut store, "filer@example.com");

    seed_complaint(
        &mut store,
        user,
        "Broken login",
        Category::Technical,
        ComplaintStatus::InProgress,
        "2026-08-01T09:00:00.000000000Z",
    );
    seed_complaint(
        &mut store,
        user,
        "Wrong invoice",
        Category::Billing,
        ComplaintStatus::Submitted,
        "2026-08-02T09:00:00.000000000Z",
    );

    let in_progress = store
        .list_complaints(
            &ComplaintFilter::ByStatus(ComplaintStatus::InProgress),
            PageRequest::default(),
        )
        .expect("Query failed");
    assert_eq!(in_progress.total, 1);
    assert_eq!(in_progress.items[0].title, "Broken login");

    let billing = store
        .list_complaints(
            &ComplaintFilter::ByCategory(Category::Billing),
            PageRequest::default(),
        )
        .expect("Query failed");
    assert_eq!(billing.total, 1);
    assert_eq!(billing.items[0].title, "Wrong invoice");

    let medium = store
        .list_complaints(
            &ComplaintFilter::ByPriority(Priority::Medium),
            PageRequest::default(),
        )
        .expect("Query failed");
    assert_eq!(medium.total, 2);
}

#[test]
fn test_pagination_slices_and_totals() {
    let mut store: Store = create_test_store();
    let user: i64 = create_test_user(&mut store, "filer@example.com");

    for i in 0..5 {
        seed_complaint(
            &mut store,
            user,
            &format!("Complaint {i}"),
            Category::General,
            ComplaintStatus::Submitted,
            "2026-08-01T09:00:00.000000000Z",
        );
    }

    let first = store
        .list_complaints(&ComplaintFilter::All, PageRequest::new(0, 2))
        .expect("Query failed");
    assert_eq!(first.total, 5);
    assert_eq!(first.items.len(), 2);
    // Newest first
    assert_eq!(first.items[0].title, "Complaint 4");
    assert_eq!(first.items[1].title, "Complaint 3");

    let second = store
        .list_complaints(&ComplaintFilter::All, PageRequest::new(1, 2))
        .expect("Query failed");
    assert_eq!(second.items.len(), 2);
    assert_eq!(second.items[0].title, "Complaint 2");

    let last = store
        .list_complaints(&ComplaintFilter::All, PageRequest::new(2, 2))
        .expect("Query failed");
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].title, "Complaint 0");

    let past_end = store
        .list_complaints(&ComplaintFilter::All, PageRequest::new(3, 2))
        .expect("Query failed");
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total, 5);
}

#[test]
fn test_page_request_clamps_inputs() {
    let request = PageRequest::new(-3, 0);
    assert_eq!(request.page, 0);
    assert_eq!(request.per_page, 1);

    let request = PageRequest::new(0, 10_000);
    assert_eq!(request.per_page, crate::MAX_PER_PAGE);
}

#[test]
fn test_search_matches_title_or_description() {
    let mut store: Store = create_test_store();
    let user: i64 = create_test_user(&mut store, "filer@example.com");

    seed_complaint(
        &mut store,
        user,
        "Router keeps rebooting",
        Category::Technical,
        ComplaintStatus::Submitted,
        "2026-08-01T09:00:00.000000000Z",
    );
    // Description from the helper mentions "invoice"
    seed_complaint(
        &mut store,
        user,
        "Unrelated title",
        Category::Billing,
        ComplaintStatus::Submitted,
        "2026-08-02T09:00:00.000000000Z",
    );

    let by_title = store
        .search_complaints("router", PageRequest::default())
        .expect("Query failed");
    assert_eq!(by_title.total, 1);
    assert_eq!(by_title.items[0].title, "Router keeps rebooting");

    let by_description = store
        .search_complaints("invoice", PageRequest::default())
        .expect("Query failed");
    assert_eq!(by_description.total, 2);

    let no_match = store
        .search_complaints("elevator", PageRequest::default())
        .expect("Query failed");
    assert_eq!(no_match.total, 0);
}

#[test]
fn test_date_range_is_inclusive() {
    let mut store: Store = create_test_store();
    let user: i64 = create_test_user(&mut store, "filer@example.com");

    let inside = seed_complaint(
        &mut store,
        user,
        "Inside range",
        Category::General,
        ComplaintStatus::Submitted,
        "2026-08-02T00:00:00.000000000Z",
    );
    seed_complaint(
        &mut store,
        user,
        "Before range",
        Category::General,
        ComplaintStatus::Submitted,
        "2026-07-30T00:00:00.000000000Z",
    );
    seed_complaint(
        &mut store,
        user,
        "After range",
        Category::General,
        ComplaintStatus::Submitted,
        "2026-08-10T00:00:00.000000000Z",
    );

    let found = store
        .list_complaints_by_date_range(
            "2026-08-01T00:00:00.000000000Z",
            "2026-08-05T00:00:00.000000000Z",
        )
        .expect("Query failed");

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].complaint_id, inside);
}

#[test]
fn test_counts_and_grouped_counts() {
    let mut store: Store = create_test_store();
    let user: i64 = create_test_user(&mut store, "filer@example.com");

    seed_complaint(
        &mut store,
        user,
        "A",
        Category::Technical,
        ComplaintStatus::Submitted,
        "2026-08-01T09:00:00.000000000Z",
    );
    seed_complaint(
        &mut store,
        user,
        "B",
        Category::Technical,
        ComplaintStatus::Resolved,
        "2026-08-01T09:00:00.000000000Z",
    );
    seed_complaint(
        &mut store,
        user,
        "C",
        Category::Billing,
        ComplaintStatus::Submitted,
        "2026-08-01T09:00:00.000000000Z",
    );

    assert_eq!(
        store
            .count_by_status(ComplaintStatus::Submitted)
            .expect("Query failed"),
        2
    );
    assert_eq!(
        store
            .count_by_status(ComplaintStatus::Closed)
            .expect("Query failed"),
        0
    );

    let mut by_category = store.count_by_category_grouped().expect("Query failed");
    by_category.sort_by_key(|(category, _)| category.as_str());
    assert_eq!(
        by_category,
        vec![(Category::Billing, 1), (Category::Technical, 2)]
    );

    let mut by_status = store.count_by_status_grouped().expect("Query failed");
    by_status.sort_by_key(|(status, _)| status.as_str());
    assert_eq!(
        by_status,
        vec![
            (ComplaintStatus::Resolved, 1),
            (ComplaintStatus::Submitted, 2)
        ]
    );
}

#[test]
fn test_history_listing_is_newest_first_by_insertion() {
    let mut store: Store = create_test_store();
    let user: i64 = create_test_user(&mut store, "filer@example.com");
    let complaint_id = seed_complaint(
        &mut store,
        user,
        "History order",
        Category::General,
        ComplaintStatus::Submitted,
        "2026-08-01T09:00:00.000000000Z",
    );

    // Same timestamp on purpose: insertion order must still win
    for status in [
        ComplaintStatus::Submitted,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
    ] {
        store
            .insert_status_history(&NewStatusHistoryRow {
                complaint_id,
                status: status.as_str().to_string(),
                changed_by: user,
                notes: String::from("step"),
                created_at: String::from("2026-08-01T09:00:00.000000000Z"),
            })
            .expect("History insert failed");
    }

    let history = store
        .list_status_history(complaint_id)
        .expect("Query failed");
    let statuses: Vec<ComplaintStatus> = history.iter().map(|entry| entry.status).collect();
    assert_eq!(
        statuses,
        vec![
            ComplaintStatus::Resolved,
            ComplaintStatus::InProgress,
            ComplaintStatus::Submitted
        ]
    );
}

#[test]
fn test_note_listing_public_only_filter() {
    let mut store: Store = create_test_store();
    let user: i64 = create_test_user(&mut store, "filer@example.com");
    let complaint_id = seed_complaint(
        &mut store,
        user,
        "Notes",
        Category::General,
        ComplaintStatus::Submitted,
        "2026-08-01T09:00:00.000000000Z",
    );

    store
        .insert_internal_note(&NewInternalNoteRow {
            complaint_id,
            note: String::from("Internal observation"),
            created_by: user,
            created_at: String::from("2026-08-01T09:01:00.000000000Z"),
            is_public: 0,
        })
        .expect("Note insert failed");
    store
        .insert_internal_note(&NewInternalNoteRow {
            complaint_id,
            note: String::from("We are looking into it"),
            created_by: user,
            created_at: String::from("2026-08-01T09:02:00.000000000Z"),
            is_public: 1,
        })
        .expect("Note insert failed");

    let all = store
        .list_internal_notes(complaint_id, false)
        .expect("Query failed");
    assert_eq!(all.len(), 2);
    // Newest first
    assert_eq!(all[0].note, "We are looking into it");
    assert!(all[0].is_public);
    assert!(!all[1].is_public);

    let public = store
        .list_internal_notes(complaint_id, true)
        .expect("Query failed");
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].note, "We are looking into it");
}
