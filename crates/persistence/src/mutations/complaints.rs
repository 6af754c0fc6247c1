// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Complaint mutation operations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use resolveit_domain::Complaint;

use crate::data_models::NewComplaintRow;
use crate::diesel_schema::complaints;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a new complaint and returns its generated ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_complaint(
    conn: &mut SqliteConnection,
    record: &NewComplaintRow,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(complaints::table)
        .values(record)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Writes a complaint's mutable columns back to its row.
///
/// Covers the columns the lifecycle manager mutates: status, assignment,
/// the updated/resolved timestamps, and the resolution text. Identity and
/// creation columns are never rewritten.
///
/// # Errors
///
/// Returns `NotFound` if no row matches the complaint's ID.
pub fn update_complaint(
    conn: &mut SqliteConnection,
    complaint: &Complaint,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        complaints::table.filter(complaints::complaint_id.eq(complaint.complaint_id)),
    )
    .set((
        complaints::status.eq(complaint.status.as_str()),
        complaints::assigned_to.eq(complaint.assigned_to),
        complaints::updated_at.eq(complaint.updated_at.as_str()),
        complaints::resolved_at.eq(complaint.resolved_at.as_deref()),
        complaints::resolution.eq(complaint.resolution.as_deref()),
    ))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Complaint {} not found",
            complaint.complaint_id
        )));
    }

    Ok(())
}

/// Deletes a complaint by ID.
///
/// History entries and internal notes are removed by the `ON DELETE
/// CASCADE` foreign keys. Deleting a missing ID is a no-op.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_complaint(
    conn: &mut SqliteConnection,
    complaint_id: i64,
) -> Result<usize, PersistenceError> {
    Ok(
        diesel::delete(complaints::table.filter(complaints::complaint_id.eq(complaint_id)))
            .execute(conn)?,
    )
}
