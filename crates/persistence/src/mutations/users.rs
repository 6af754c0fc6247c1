// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User mutation operations.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::NewUserRow;
use crate::diesel_schema::users;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a new user and returns their generated ID.
///
/// # Errors
///
/// Returns an error if the insert fails (including a duplicate email).
pub fn insert_user(
    conn: &mut SqliteConnection,
    record: &NewUserRow,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(users::table)
        .values(record)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}
