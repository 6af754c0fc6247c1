// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row models for the database tables.
//!
//! Enum-valued domain fields are stored as their snake_case string form.
//! Conversions back to domain types are fallible: a stored value that no
//! longer parses is surfaced as `PersistenceError::DataCorruption` rather
//! than silently coerced.

use std::str::FromStr;

use diesel::prelude::*;
use resolveit_domain::{
    Category, Complaint, ComplaintStatus, InternalNote, Priority, Role, StatusHistory, User,
};

use crate::diesel_schema::{complaints, internal_notes, status_history, users};
use crate::error::PersistenceError;

/// Parses a stored enum string, mapping failures to `DataCorruption`.
pub(crate) fn parse_stored<T: FromStr>(value: &str, column: &str) -> Result<T, PersistenceError>
where
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| {
        PersistenceError::DataCorruption(format!("column '{column}' holds '{value}': {e}"))
    })
}

#[derive(Debug, Clone, Queryable)]
pub struct UserRow {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

impl UserRow {
    /// Converts this row into a domain user.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored role does not parse.
    pub fn into_domain(self) -> Result<User, PersistenceError> {
        let role: Role = parse_stored(&self.role, "users.role")?;
        Ok(User {
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Queryable)]
pub struct ComplaintRow {
    pub complaint_id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub user_id: i64,
    pub assigned_to: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    pub resolved_at: Option<String>,
    pub resolution: Option<String>,
}

impl ComplaintRow {
    /// Converts this row into a domain complaint.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored enum column does not parse.
    pub fn into_domain(self) -> Result<Complaint, PersistenceError> {
        let category: Category = parse_stored(&self.category, "complaints.category")?;
        let priority: Priority = parse_stored(&self.priority, "complaints.priority")?;
        let status: ComplaintStatus = parse_stored(&self.status, "complaints.status")?;
        Ok(Complaint {
            complaint_id: self.complaint_id,
            title: self.title,
            description: self.description,
            category,
            priority,
            status,
            user_id: self.user_id,
            assigned_to: self.assigned_to,
            created_at: self.created_at,
            updated_at: self.updated_at,
            resolved_at: self.resolved_at,
            resolution: self.resolution,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = complaints)]
pub struct NewComplaintRow {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub user_id: i64,
    pub assigned_to: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    pub resolved_at: Option<String>,
    pub resolution: Option<String>,
}

#[derive(Debug, Clone, Queryable)]
pub struct StatusHistoryRow {
    pub history_id: i64,
    pub complaint_id: i64,
    pub status: String,
    pub changed_by: i64,
    pub notes: String,
    pub created_at: String,
}

impl StatusHistoryRow {
    /// Converts this row into a domain history entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored status does not parse.
    pub fn into_domain(self) -> Result<StatusHistory, PersistenceError> {
        let status: ComplaintStatus = parse_stored(&self.status, "status_history.status")?;
        Ok(StatusHistory {
            history_id: self.history_id,
            complaint_id: self.complaint_id,
            status,
            changed_by: self.changed_by,
            notes: self.notes,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = status_history)]
pub struct NewStatusHistoryRow {
    pub complaint_id: i64,
    pub status: String,
    pub changed_by: i64,
    pub notes: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Queryable)]
pub struct InternalNoteRow {
    pub note_id: i64,
    pub complaint_id: i64,
    pub note: String,
    pub created_by: i64,
    pub created_at: String,
    pub is_public: i32,
}

impl InternalNoteRow {
    /// Converts this row into a domain note.
    #[must_use]
    pub fn into_domain(self) -> InternalNote {
        InternalNote {
            note_id: self.note_id,
            complaint_id: self.complaint_id,
            note: self.note,
            created_by: self.created_by,
            created_at: self.created_at,
            is_public: self.is_public != 0,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = internal_notes)]
pub struct NewInternalNoteRow {
    pub complaint_id: i64,
    pub note: String,
    pub created_by: i64,
    pub created_at: String,
    pub is_public: i32,
}
