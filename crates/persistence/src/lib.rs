// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the ResolveIt complaint tracker.
//!
//! This crate provides durable keyed storage for complaints, their
//! append-only status history, internal notes, and user records. It is
//! built on Diesel with an embedded-migration `SQLite` backend.
//!
//! ## Backends
//!
//! `SQLite` is the only backend:
//!
//! - In-memory databases back unit and integration tests (fast,
//!   deterministic, no external infrastructure)
//! - File-backed databases (WAL mode) back deployments
//!
//! ## Testing Philosophy
//!
//! - Standard tests (`cargo test`) run against unique in-memory databases
//! - No external services are required or contacted
//! - Foreign key enforcement is verified at startup, never assumed

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
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use diesel::SqliteConnection;
use resolveit_domain::{
    Category, Complaint, ComplaintStatus, InternalNote, Priority, StatusHistory, User,
};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{NewComplaintRow, NewInternalNoteRow, NewStatusHistoryRow, NewUserRow};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Upper bound on page size, applied when building a `PageRequest`.
pub const MAX_PER_PAGE: i64 = 100;

/// A page request: 0-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    /// Creates a page request, clamping the page index to be non-negative
    /// and the page size into `1..=MAX_PER_PAGE`.
    #[must_use]
    pub const fn new(page: i64, per_page: i64) -> Self {
        let page = if page < 0 { 0 } else { page };
        let per_page = if per_page < 1 {
            1
        } else if per_page > MAX_PER_PAGE {
            MAX_PER_PAGE
        } else {
            per_page
        };
        Self { page, per_page }
    }

    /// Returns the row offset of this page.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.page * self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, 20)
    }
}

/// One page of results plus the total row count for the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

impl<T> Page<T> {
    pub(crate) const fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            per_page: request.per_page,
        }
    }
}

/// Row filter for complaint listings. At most one criterion applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintFilter {
    /// No filter: all complaints.
    All,
    /// Complaints filed by a user.
    ByUser(i64),
    /// Complaints assigned to a staff user.
    ByAssignee(i64),
    /// Complaints in a status.
    ByStatus(ComplaintStatus),
    /// Complaints in a category.
    ByCategory(Category),
    /// Complaints with a priority.
    ByPriority(Priority),
}

/// Persistence adapter for the complaint tracker.
///
/// Owns a single `SQLite` connection; all operations are synchronous and
/// durable on return.
pub struct Store {
    conn: SqliteConnection,
}

impl Store {
    /// Creates a new store with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_resolveit_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;

        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new store with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;

        // WAL mode for better read concurrency on file-backed databases
        sqlite::enable_wal_mode(&mut conn)?;

        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Complaints
    // ========================================================================

    /// Inserts a new complaint and returns its generated ID.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn insert_complaint(&mut self, record: &NewComplaintRow) -> Result<i64, PersistenceError> {
        mutations::complaints::insert_complaint(&mut self.conn, record)
    }

    /// Retrieves a complaint by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_complaint(
        &mut self,
        complaint_id: i64,
    ) -> Result<Option<Complaint>, PersistenceError> {
        queries::complaints::get_complaint(&mut self.conn, complaint_id)
    }

    /// Writes a complaint's mutable columns back to its row.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the complaint does not exist.
    pub fn update_complaint(&mut self, complaint: &Complaint) -> Result<(), PersistenceError> {
        mutations::complaints::update_complaint(&mut self.conn, complaint)
    }

    /// Deletes a complaint; its history and notes cascade with it.
    ///
    /// Returns the number of complaint rows removed (0 or 1).
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_complaint(&mut self, complaint_id: i64) -> Result<usize, PersistenceError> {
        mutations::complaints::delete_complaint(&mut self.conn, complaint_id)
    }

    /// Lists complaints matching a filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_complaints(
        &mut self,
        filter: &ComplaintFilter,
        page: PageRequest,
    ) -> Result<Page<Complaint>, PersistenceError> {
        queries::complaints::list_complaints(&mut self.conn, filter, page)
    }

    /// Searches complaints by a title/description keyword, newest first.
    ///
    /// Matching follows `SQLite` `LIKE` semantics (ASCII-case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn search_complaints(
        &mut self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Complaint>, PersistenceError> {
        queries::complaints::search_complaints(&mut self.conn, keyword, page)
    }

    /// Lists complaints created within an inclusive ISO 8601 timestamp range.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_complaints_by_date_range(
        &mut self,
        start: &str,
        end: &str,
    ) -> Result<Vec<Complaint>, PersistenceError> {
        queries::complaints::list_complaints_by_date_range(&mut self.conn, start, end)
    }

    /// Counts complaints with a given status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_by_status(&mut self, status: ComplaintStatus) -> Result<i64, PersistenceError> {
        queries::complaints::count_by_status(&mut self.conn, status)
    }

    /// Counts complaints grouped by category.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_by_category_grouped(
        &mut self,
    ) -> Result<Vec<(Category, i64)>, PersistenceError> {
        queries::complaints::count_by_category_grouped(&mut self.conn)
    }

    /// Counts complaints grouped by status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_by_status_grouped(
        &mut self,
    ) -> Result<Vec<(ComplaintStatus, i64)>, PersistenceError> {
        queries::complaints::count_by_status_grouped(&mut self.conn)
    }

    // ========================================================================
    // Status history
    // ========================================================================

    /// Appends a status history entry and returns its generated ID.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn insert_status_history(
        &mut self,
        record: &NewStatusHistoryRow,
    ) -> Result<i64, PersistenceError> {
        mutations::history::insert_status_history(&mut self.conn, record)
    }

    /// Lists the status history of a complaint, newest entry first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_status_history(
        &mut self,
        complaint_id: i64,
    ) -> Result<Vec<StatusHistory>, PersistenceError> {
        queries::history::list_status_history(&mut self.conn, complaint_id)
    }

    // ========================================================================
    // Internal notes
    // ========================================================================

    /// Inserts an internal note and returns its generated ID.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn insert_internal_note(
        &mut self,
        record: &NewInternalNoteRow,
    ) -> Result<i64, PersistenceError> {
        mutations::notes::insert_internal_note(&mut self.conn, record)
    }

    /// Lists the notes on a complaint, newest first, optionally restricted
    /// to public notes.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_internal_notes(
        &mut self,
        complaint_id: i64,
        public_only: bool,
    ) -> Result<Vec<InternalNote>, PersistenceError> {
        queries::notes::list_internal_notes(&mut self.conn, complaint_id, public_only)
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Inserts a new user and returns their generated ID.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails (including a duplicate email).
    pub fn insert_user(&mut self, record: &NewUserRow) -> Result<i64, PersistenceError> {
        mutations::users::insert_user(&mut self.conn, record)
    }

    /// Retrieves a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user(&mut self, user_id: i64) -> Result<Option<User>, PersistenceError> {
        queries::users::get_user(&mut self.conn, user_id)
    }

    /// Retrieves a user by email address.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user_by_email(&mut self, email: &str) -> Result<Option<User>, PersistenceError> {
        queries::users::get_user_by_email(&mut self.conn, email)
    }

    /// Lists all users, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_users(&mut self) -> Result<Vec<User>, PersistenceError> {
        queries::users::list_users(&mut self.conn)
    }
}
