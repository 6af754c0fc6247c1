// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Internal note mutation operations.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::NewInternalNoteRow;
use crate::diesel_schema::internal_notes;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts an internal note and returns its generated ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_internal_note(
    conn: &mut SqliteConnection,
    record: &NewInternalNoteRow,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(internal_notes::table)
        .values(record)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}
