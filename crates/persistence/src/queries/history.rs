// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status history query operations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use resolveit_domain::StatusHistory;

use crate::data_models::StatusHistoryRow;
use crate::diesel_schema::status_history;
use crate::error::PersistenceError;

/// Lists the status history of a complaint, newest entry first.
///
/// Ordering is by insertion (row ID), not by the stored timestamp, so the
/// order stays stable when several entries share a timestamp.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is corrupt.
pub fn list_status_history(
    conn: &mut SqliteConnection,
    complaint_id: i64,
) -> Result<Vec<StatusHistory>, PersistenceError> {
    let rows: Vec<StatusHistoryRow> = status_history::table
        .filter(status_history::complaint_id.eq(complaint_id))
        .order(status_history::history_id.desc())
        .load(conn)?;

    rows.into_iter().map(StatusHistoryRow::into_domain).collect()
}
