// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Internal note query operations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use resolveit_domain::InternalNote;

use crate::data_models::InternalNoteRow;
use crate::diesel_schema::internal_notes;
use crate::error::PersistenceError;

/// Lists the notes on a complaint, newest first.
///
/// With `public_only` set, internal-only notes are filtered out (the view
/// shown to the filing user).
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_internal_notes(
    conn: &mut SqliteConnection,
    complaint_id: i64,
    public_only: bool,
) -> Result<Vec<InternalNote>, PersistenceError> {
    let mut query = internal_notes::table
        .filter(internal_notes::complaint_id.eq(complaint_id))
        .into_boxed();

    if public_only {
        query = query.filter(internal_notes::is_public.eq(1));
    }

    let rows: Vec<InternalNoteRow> = query.order(internal_notes::note_id.desc()).load(conn)?;

    Ok(rows.into_iter().map(InternalNoteRow::into_domain).collect())
}
