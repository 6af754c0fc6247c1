// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User query operations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use resolveit_domain::User;

use crate::data_models::UserRow;
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Retrieves a user by ID.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is corrupt.
pub fn get_user(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<User>, PersistenceError> {
    let row: Option<UserRow> = users::table
        .filter(users::user_id.eq(user_id))
        .first::<UserRow>(conn)
        .optional()?;

    row.map(UserRow::into_domain).transpose()
}

/// Retrieves a user by email address.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is corrupt.
pub fn get_user_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<User>, PersistenceError> {
    let row: Option<UserRow> = users::table
        .filter(users::email.eq(email))
        .first::<UserRow>(conn)
        .optional()?;

    row.map(UserRow::into_domain).transpose()
}

/// Lists all users, ordered by ID.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is corrupt.
pub fn list_users(conn: &mut SqliteConnection) -> Result<Vec<User>, PersistenceError> {
    let rows: Vec<UserRow> = users::table.order(users::user_id.asc()).load(conn)?;

    rows.into_iter().map(UserRow::into_domain).collect()
}
