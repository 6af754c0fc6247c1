// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Complaint lifecycle manager for the ResolveIt complaint tracker.
//!
//! This crate owns the creation, status transition, assignment, and
//! note-attachment workflows. Each operation runs to completion
//! synchronously, in a fixed order that the audit trail depends on:
//!
//! 1. the complaint row is written,
//! 2. exactly one status history entry is appended,
//! 3. a notification is dispatched.
//!
//! The notification step is best-effort: its failure is swallowed by the
//! [`Notifier`] and never fails or rolls back the first two steps.
//!
//! There is no status-transition legality matrix. Any status may follow
//! any other status; the one automatic transition is Submitted →
//! `InProgress` when a complaint is assigned. Concurrent writers to the
//! same complaint are last-writer-wins at the row level, while each writer
//! still appends its own history entry.

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

mod clock;
mod error;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ServiceError;
// Re-exported so boundary layers can build listings without depending on
// the persistence crate directly.
pub use resolveit_persistence::{ComplaintFilter, Page, PageRequest};

use resolveit_domain::{
    Category, Complaint, ComplaintDraft, ComplaintStatus, InternalNote, StatusHistory, User,
};
use resolveit_notify::{
    Notifier, assignment, public_note, status_update, submission_confirmation,
};
use resolveit_persistence::{
    NewComplaintRow, NewInternalNoteRow, NewStatusHistoryRow, Store,
};
use time::format_description::well_known::Iso8601;
use tracing::{info, warn};

/// The complaint lifecycle manager.
///
/// Generic over its injected collaborators: the [`Clock`] that stamps
/// entity timestamps and the [`Notifier`] that delivers messages. The
/// store is passed into each operation.
pub struct ComplaintService<C: Clock, N: Notifier> {
    clock: C,
    notifier: N,
}

impl<C: Clock, N: Notifier> ComplaintService<C, N> {
    /// Creates a lifecycle manager with the given collaborators.
    pub const fn new(clock: C, notifier: N) -> Self {
        Self { clock, notifier }
    }

    /// Formats the current instant as an ISO 8601 timestamp.
    fn timestamp(&self) -> Result<String, ServiceError> {
        self.clock
            .now()
            .format(&Iso8601::DEFAULT)
            .map_err(|e| ServiceError::Time(e.to_string()))
    }

    /// Looks up the filing user of a complaint for notification addressing.
    ///
    /// Returns `None` (after logging) when the filer cannot be resolved:
    /// the primary writes have already committed and notification is
    /// best-effort, so a missing address must not fail the operation.
    fn filer_for_notification(&self, store: &mut Store, complaint: &Complaint) -> Option<User> {
        match store.get_user(complaint.user_id) {
            Ok(Some(user)) => Some(user),
            Ok(None) => {
                warn!(
                    complaint_id = complaint.complaint_id,
                    user_id = complaint.user_id,
                    "Filer not found; skipping notification"
                );
                None
            }
            Err(err) => {
                warn!(
                    complaint_id = complaint.complaint_id,
                    user_id = complaint.user_id,
                    error = %err,
                    "Failed to load filer; skipping notification"
                );
                None
            }
        }
    }

    // ========================================================================
    // Mutating operations
    // ========================================================================

    /// Files a new complaint.
    ///
    /// The persisted status is always `Submitted`, irrespective of anything
    /// the caller intended; creation is the only way a complaint enters the
    /// lifecycle. Appends the initial history entry and sends a submission
    /// confirmation to the filer.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails. Field validation is the
    /// boundary layer's job; drafts reaching this manager are assumed valid.
    pub fn create(
        &self,
        store: &mut Store,
        draft: ComplaintDraft,
        filer: &User,
    ) -> Result<Complaint, ServiceError> {
        let now: String = self.timestamp()?;

        let record = NewComplaintRow {
            title: draft.title,
            description: draft.description,
            category: draft.category.as_str().to_string(),
            priority: draft.priority.as_str().to_string(),
            status: ComplaintStatus::Submitted.as_str().to_string(),
            user_id: filer.user_id,
            assigned_to: None,
            created_at: now.clone(),
            updated_at: now.clone(),
            resolved_at: None,
            resolution: None,
        };
        let complaint_id: i64 = store.insert_complaint(&record)?;

        store.insert_status_history(&NewStatusHistoryRow {
            complaint_id,
            status: ComplaintStatus::Submitted.as_str().to_string(),
            changed_by: filer.user_id,
            notes: String::from("Complaint submitted"),
            created_at: now,
        })?;

        let complaint: Complaint = store
            .get_complaint(complaint_id)?
            .ok_or(ServiceError::ComplaintNotFound(complaint_id))?;

        info!(
            complaint_id = complaint_id,
            user_id = filer.user_id,
            category = %complaint.category,
            "Complaint created"
        );

        let (subject, body) = submission_confirmation(&complaint, filer);
        self.notifier.notify(&filer.email, &subject, &body);

        Ok(complaint)
    }

    /// Moves a complaint to a new status.
    ///
    /// Transitions into `Resolved` or `Closed` stamp `resolved_at`,
    /// overwriting any earlier value; there is no guard against
    /// re-resolving. An optional resolution summary may be recorded in the
    /// same step. Appends a history entry carrying the new status and sends
    /// a status-change notification to the filer.
    ///
    /// # Errors
    ///
    /// Returns `ComplaintNotFound` (with no writes) if the ID does not
    /// resolve, or a persistence error.
    pub fn transition_status(
        &self,
        store: &mut Store,
        complaint_id: i64,
        new_status: ComplaintStatus,
        actor: &User,
        notes: &str,
        resolution: Option<String>,
    ) -> Result<Complaint, ServiceError> {
        let mut complaint: Complaint = store
            .get_complaint(complaint_id)?
            .ok_or(ServiceError::ComplaintNotFound(complaint_id))?;

        let old_status: ComplaintStatus = complaint.status;
        let now: String = self.timestamp()?;

        complaint.status = new_status;
        complaint.updated_at.clone_from(&now);
        if new_status.is_resolution() {
            complaint.resolved_at = Some(now.clone());
        }
        if let Some(resolution) = resolution {
            complaint.resolution = Some(resolution);
        }

        store.update_complaint(&complaint)?;

        store.insert_status_history(&NewStatusHistoryRow {
            complaint_id,
            status: new_status.as_str().to_string(),
            changed_by: actor.user_id,
            notes: notes.to_string(),
            created_at: now,
        })?;

        info!(
            complaint_id = complaint_id,
            actor_id = actor.user_id,
            old_status = %old_status,
            new_status = %new_status,
            "Complaint status updated"
        );

        if let Some(filer) = self.filer_for_notification(store, &complaint) {
            let (subject, body) = status_update(&complaint, &filer, old_status, new_status);
            self.notifier.notify(&filer.email, &subject, &body);
        }

        Ok(complaint)
    }

    /// Assigns a complaint to a staff user.
    ///
    /// A `Submitted` complaint auto-advances to `InProgress` as a side
    /// effect of assignment; any other status is left alone. The history
    /// entry carries the status after the auto-advance. The assignee (not
    /// the filer) is notified.
    ///
    /// # Errors
    ///
    /// Returns `ComplaintNotFound` (with no writes) if the ID does not
    /// resolve, or a persistence error.
    pub fn assign(
        &self,
        store: &mut Store,
        complaint_id: i64,
        assignee: &User,
        actor: &User,
    ) -> Result<Complaint, ServiceError> {
        let mut complaint: Complaint = store
            .get_complaint(complaint_id)?
            .ok_or(ServiceError::ComplaintNotFound(complaint_id))?;

        let now: String = self.timestamp()?;

        complaint.assigned_to = Some(assignee.user_id);
        complaint.updated_at.clone_from(&now);
        if complaint.status == ComplaintStatus::Submitted {
            complaint.status = ComplaintStatus::InProgress;
        }

        store.update_complaint(&complaint)?;

        store.insert_status_history(&NewStatusHistoryRow {
            complaint_id,
            status: complaint.status.as_str().to_string(),
            changed_by: actor.user_id,
            notes: format!("Complaint assigned to {}", assignee.full_name()),
            created_at: now,
        })?;

        info!(
            complaint_id = complaint_id,
            assignee_id = assignee.user_id,
            actor_id = actor.user_id,
            status = %complaint.status,
            "Complaint assigned"
        );

        if let Some(filer) = self.filer_for_notification(store, &complaint) {
            let (subject, body) = assignment(&complaint, &filer, assignee);
            self.notifier.notify(&assignee.email, &subject, &body);
        }

        Ok(complaint)
    }

    /// Attaches a note to a complaint.
    ///
    /// The complaint itself is untouched: no status mutation and no history
    /// entry. A public note triggers a notification to the filer carrying
    /// the note text; an internal note triggers nothing.
    ///
    /// # Errors
    ///
    /// Returns `ComplaintNotFound` (with no writes) if the ID does not
    /// resolve, or a persistence error.
    pub fn add_note(
        &self,
        store: &mut Store,
        complaint_id: i64,
        text: &str,
        author: &User,
        is_public: bool,
    ) -> Result<InternalNote, ServiceError> {
        let complaint: Complaint = store
            .get_complaint(complaint_id)?
            .ok_or(ServiceError::ComplaintNotFound(complaint_id))?;

        let now: String = self.timestamp()?;

        let note_id: i64 = store.insert_internal_note(&NewInternalNoteRow {
            complaint_id,
            note: text.to_string(),
            created_by: author.user_id,
            created_at: now.clone(),
            is_public: i32::from(is_public),
        })?;

        info!(
            complaint_id = complaint_id,
            note_id = note_id,
            author_id = author.user_id,
            is_public = is_public,
            "Note added"
        );

        if is_public
            && let Some(filer) = self.filer_for_notification(store, &complaint)
        {
            let (subject, body) = public_note(&complaint, &filer, text);
            self.notifier.notify(&filer.email, &subject, &body);
        }

        Ok(InternalNote {
            note_id,
            complaint_id,
            note: text.to_string(),
            created_by: author.user_id,
            created_at: now,
            is_public,
        })
    }

    /// Deletes a complaint and, with it, its history and notes.
    ///
    /// Deleting an unknown ID is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete(&self, store: &mut Store, complaint_id: i64) -> Result<(), ServiceError> {
        let removed: usize = store.delete_complaint(complaint_id)?;
        info!(complaint_id = complaint_id, removed = removed, "Complaint deleted");
        Ok(())
    }

    // ========================================================================
    // Read operations
    // ========================================================================

    /// Retrieves a complaint by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn find_by_id(
        &self,
        store: &mut Store,
        complaint_id: i64,
    ) -> Result<Option<Complaint>, ServiceError> {
        Ok(store.get_complaint(complaint_id)?)
    }

    /// Lists complaints matching a filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn list(
        &self,
        store: &mut Store,
        filter: &ComplaintFilter,
        page: PageRequest,
    ) -> Result<Page<Complaint>, ServiceError> {
        Ok(store.list_complaints(filter, page)?)
    }

    /// Searches complaints by a title/description keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn search(
        &self,
        store: &mut Store,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Complaint>, ServiceError> {
        Ok(store.search_complaints(keyword, page)?)
    }

    /// Lists complaints created within an inclusive timestamp range.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn list_by_date_range(
        &self,
        store: &mut Store,
        start: &str,
        end: &str,
    ) -> Result<Vec<Complaint>, ServiceError> {
        Ok(store.list_complaints_by_date_range(start, end)?)
    }

    /// Counts complaints with a given status.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn count_by_status(
        &self,
        store: &mut Store,
        status: ComplaintStatus,
    ) -> Result<i64, ServiceError> {
        Ok(store.count_by_status(status)?)
    }

    /// Counts complaints grouped by category.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn count_grouped_by_category(
        &self,
        store: &mut Store,
    ) -> Result<Vec<(Category, i64)>, ServiceError> {
        Ok(store.count_by_category_grouped()?)
    }

    /// Counts complaints grouped by status.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn count_grouped_by_status(
        &self,
        store: &mut Store,
    ) -> Result<Vec<(ComplaintStatus, i64)>, ServiceError> {
        Ok(store.count_by_status_grouped()?)
    }

    /// Lists the status history of a complaint, newest entry first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn history(
        &self,
        store: &mut Store,
        complaint_id: i64,
    ) -> Result<Vec<StatusHistory>, ServiceError> {
        Ok(store.list_status_history(complaint_id)?)
    }

    /// Lists the notes on a complaint, newest first, optionally restricted
    /// to public notes.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn notes(
        &self,
        store: &mut Store,
        complaint_id: i64,
        public_only: bool,
    ) -> Result<Vec<InternalNote>, ServiceError> {
        Ok(store.list_internal_notes(complaint_id, public_only)?)
    }
}
