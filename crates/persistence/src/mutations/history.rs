// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status history mutation operations.
//!
//! History rows are append-only: there is deliberately no update or
//! single-row delete here. Rows disappear only via the cascading delete
//! of their complaint.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::NewStatusHistoryRow;
use crate::diesel_schema::status_history;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Appends a status history entry and returns its generated ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_status_history(
    conn: &mut SqliteConnection,
    record: &NewStatusHistoryRow,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(status_history::table)
        .values(record)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}
