// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification dispatch for the ResolveIt complaint tracker.
//!
//! Delivery is best-effort and fire-and-forget: the [`Notifier`] contract
//! is infallible from the caller's perspective, and implementations catch
//! and log their own delivery problems. A failed notification never fails
//! or rolls back the operation that triggered it; the only trace is in the
//! logs.
//!
//! This crate owns message composition (subjects and bodies); the outbound
//! transport behind [`Notifier::notify`] is an external system.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod messages;

pub use messages::{assignment, public_note, status_update, submission_confirmation};

use tracing::info;

/// Best-effort message delivery to a user's contact address.
///
/// Implementations must not propagate delivery failures: log and move on.
pub trait Notifier {
    /// Dispatches a message. Never fails from the caller's perspective.
    fn notify(&self, recipient: &str, subject: &str, body: &str);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, recipient: &str, subject: &str, body: &str) {
        (**self).notify(recipient, subject, body);
    }
}

impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn notify(&self, recipient: &str, subject: &str, body: &str) {
        (**self).notify(recipient, subject, body);
    }
}

/// Delivery stub that writes each message to the log.
///
/// Stands in for the outbound mail transport in development and tests;
/// a production deployment swaps in a transport-backed implementation
/// behind the same trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, recipient: &str, subject: &str, body: &str) {
        info!(
            recipient = %recipient,
            subject = %subject,
            body_len = body.len(),
            "Dispatching notification"
        );
    }
}
