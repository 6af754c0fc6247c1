// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod read_tests;

use std::sync::{Arc, Mutex};

use resolveit_domain::{Category, ComplaintDraft, Priority, User};
use resolveit_notify::Notifier;
use resolveit_persistence::{NewUserRow, Store};
use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;
use time::macros::datetime;

use crate::{ComplaintService, FixedClock};

/// One captured notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Notifier that records every dispatched message for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<SentMessage>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<SentMessage> {
        self.sent.lock().expect("Notifier lock poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, recipient: &str, subject: &str, body: &str) {
        self.sent
            .lock()
            .expect("Notifier lock poisoned")
            .push(SentMessage {
                recipient: recipient.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });
    }
}

pub const fn fixed_instant() -> OffsetDateTime {
    datetime!(2026-08-07 10:00:00 UTC)
}

/// The timestamp the fixed clock stamps onto entities.
pub fn fixed_timestamp() -> String {
    fixed_instant()
        .format(&Iso8601::DEFAULT)
        .expect("Valid test timestamp")
}

pub fn create_test_service(
    notifier: &Arc<RecordingNotifier>,
) -> ComplaintService<FixedClock, Arc<RecordingNotifier>> {
    ComplaintService::new(FixedClock(fixed_instant()), Arc::clone(notifier))
}

pub fn create_test_store() -> Store {
    Store::new_in_memory().expect("Failed to create in-memory store")
}

pub fn seed_user(store: &mut Store, first_name: &str, email: &str, role: &str) -> User {
    let user_id: i64 = store
        .insert_user(&NewUserRow {
            first_name: first_name.to_string(),
            last_name: String::from("Tester"),
            email: email.to_string(),
            role: role.to_string(),
        })
        .expect("Failed to insert test user");

    store
        .get_user(user_id)
        .expect("Failed to load test user")
        .expect("Test user missing")
}

pub fn billing_draft() -> ComplaintDraft {
    ComplaintDraft {
        title: String::from("Charged twice for August"),
        description: String::from("My card shows two charges for the same plan."),
        category: Category::Billing,
        priority: Priority::default(),
    }
}
