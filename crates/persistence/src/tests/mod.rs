// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod complaint_tests;
mod query_tests;

use resolveit_domain::{Category, ComplaintStatus, Priority};

use crate::{NewComplaintRow, NewStatusHistoryRow, NewUserRow, Store};

pub fn create_test_store() -> Store {
    Store::new_in_memory().expect("Failed to create in-memory store")
}

pub fn create_test_user(store: &mut Store, email: &str) -> i64 {
    store
        .insert_user(&NewUserRow {
            first_name: String::from("Test"),
            last_name: String::from("User"),
            email: email.to_string(),
            role: String::from("user"),
        })
        .expect("Failed to insert test user")
}

pub fn create_test_complaint_row(user_id: i64) -> NewComplaintRow {
    NewComplaintRow {
        title: String::from("Invoice shows the wrong amount"),
        description: String::from("My last invoice lists a plan I never ordered."),
        category: Category::Billing.as_str().to_string(),
        priority: Priority::Medium.as_str().to_string(),
        status: ComplaintStatus::Submitted.as_str().to_string(),
        user_id,
        assigned_to: None,
        created_at: String::from("2026-08-07T10:00:00.000000000Z"),
        updated_at: String::from("2026-08-07T10:00:00.000000000Z"),
        resolved_at: None,
        resolution: None,
    }
}

pub fn create_test_history_row(complaint_id: i64, changed_by: i64) -> NewStatusHistoryRow {
    NewStatusHistoryRow {
        complaint_id,
        status: ComplaintStatus::Submitted.as_str().to_string(),
        changed_by,
        notes: String::from("Complaint submitted"),
        created_at: String::from("2026-08-07T10:00:00.000000000Z"),
    }
}
