// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Complaint query operations.

use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use diesel::SqliteConnection;
use resolveit_domain::{Category, Complaint, ComplaintStatus};

use crate::data_models::{ComplaintRow, parse_stored};
use crate::diesel_schema::complaints;
use crate::error::PersistenceError;
use crate::{ComplaintFilter, Page, PageRequest};

/// Builds the base query for a filter.
fn filtered(filter: &ComplaintFilter) -> complaints::BoxedQuery<'static, Sqlite> {
    let query = complaints::table.into_boxed();
    match filter {
        ComplaintFilter::All => query,
        ComplaintFilter::ByUser(user_id) => query.filter(complaints::user_id.eq(*user_id)),
        ComplaintFilter::ByAssignee(user_id) => {
            query.filter(complaints::assigned_to.eq(Some(*user_id)))
        }
        ComplaintFilter::ByStatus(status) => query.filter(complaints::status.eq(status.as_str())),
        ComplaintFilter::ByCategory(category) => {
            query.filter(complaints::category.eq(category.as_str()))
        }
        ComplaintFilter::ByPriority(priority) => {
            query.filter(complaints::priority.eq(priority.as_str()))
        }
    }
}

/// Converts loaded rows into domain complaints.
fn rows_into_domain(rows: Vec<ComplaintRow>) -> Result<Vec<Complaint>, PersistenceError> {
    rows.into_iter().map(ComplaintRow::into_domain).collect()
}

/// Counts all rows matching a filter.
fn count_filtered(
    conn: &mut SqliteConnection,
    filter: &ComplaintFilter,
) -> Result<i64, PersistenceError> {
    let count: i64 = match filter {
        ComplaintFilter::All => complaints::table.count().get_result(conn)?,
        ComplaintFilter::ByUser(user_id) => complaints::table
            .filter(complaints::user_id.eq(*user_id))
            .count()
            .get_result(conn)?,
        ComplaintFilter::ByAssignee(user_id) => complaints::table
            .filter(complaints::assigned_to.eq(Some(*user_id)))
            .count()
            .get_result(conn)?,
        ComplaintFilter::ByStatus(status) => complaints::table
            .filter(complaints::status.eq(status.as_str()))
            .count()
            .get_result(conn)?,
        ComplaintFilter::ByCategory(category) => complaints::table
            .filter(complaints::category.eq(category.as_str()))
            .count()
            .get_result(conn)?,
        ComplaintFilter::ByPriority(priority) => complaints::table
            .filter(complaints::priority.eq(priority.as_str()))
            .count()
            .get_result(conn)?,
    };
    Ok(count)
}

/// Retrieves a complaint by ID.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is corrupt.
pub fn get_complaint(
    conn: &mut SqliteConnection,
    complaint_id: i64,
) -> Result<Option<Complaint>, PersistenceError> {
    let row: Option<ComplaintRow> = complaints::table
        .filter(complaints::complaint_id.eq(complaint_id))
        .first::<ComplaintRow>(conn)
        .optional()?;

    row.map(ComplaintRow::into_domain).transpose()
}

/// Lists complaints matching a filter, newest first, one page at a time.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is corrupt.
pub fn list_complaints(
    conn: &mut SqliteConnection,
    filter: &ComplaintFilter,
    page: PageRequest,
) -> Result<Page<Complaint>, PersistenceError> {
    let total: i64 = count_filtered(conn, filter)?;

    let rows: Vec<ComplaintRow> = filtered(filter)
        .order(complaints::complaint_id.desc())
        .limit(page.per_page)
        .offset(page.offset())
        .load(conn)?;

    Ok(Page::new(rows_into_domain(rows)?, total, page))
}

/// Searches complaints whose title or description contains the keyword,
/// newest first, one page at a time.
///
/// Matching uses `SQLite` `LIKE` semantics, which are case-insensitive for
/// ASCII text.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is corrupt.
pub fn search_complaints(
    conn: &mut SqliteConnection,
    keyword: &str,
    page: PageRequest,
) -> Result<Page<Complaint>, PersistenceError> {
    let pattern: String = format!("%{keyword}%");

    let total: i64 = complaints::table
        .filter(
            complaints::title
                .like(&pattern)
                .or(complaints::description.like(&pattern)),
        )
        .count()
        .get_result(conn)?;

    let rows: Vec<ComplaintRow> = complaints::table
        .filter(
            complaints::title
                .like(&pattern)
                .or(complaints::description.like(&pattern)),
        )
        .order(complaints::complaint_id.desc())
        .limit(page.per_page)
        .offset(page.offset())
        .load(conn)?;

    Ok(Page::new(rows_into_domain(rows)?, total, page))
}

/// Lists complaints created within an inclusive timestamp range.
///
/// Bounds are ISO 8601 text; comparison is lexicographic, which matches
/// chronological order for uniformly formatted timestamps.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is corrupt.
pub fn list_complaints_by_date_range(
    conn: &mut SqliteConnection,
    start: &str,
    end: &str,
) -> Result<Vec<Complaint>, PersistenceError> {
    let rows: Vec<ComplaintRow> = complaints::table
        .filter(complaints::created_at.between(start, end))
        .order(complaints::complaint_id.asc())
        .load(conn)?;

    rows_into_domain(rows)
}

/// Counts complaints with a given status.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_by_status(
    conn: &mut SqliteConnection,
    status: ComplaintStatus,
) -> Result<i64, PersistenceError> {
    Ok(complaints::table
        .filter(complaints::status.eq(status.as_str()))
        .count()
        .get_result(conn)?)
}

/// Counts complaints grouped by category.
///
/// # Errors
///
/// Returns an error if the query fails or a stored category is corrupt.
pub fn count_by_category_grouped(
    conn: &mut SqliteConnection,
) -> Result<Vec<(Category, i64)>, PersistenceError> {
    let rows: Vec<(String, i64)> = complaints::table
        .group_by(complaints::category)
        .select((complaints::category, count_star()))
        .load(conn)?;

    rows.into_iter()
        .map(|(category, count)| {
            let category: Category = parse_stored(&category, "complaints.category")?;
            Ok((category, count))
        })
        .collect()
}

/// Counts complaints grouped by status.
///
/// # Errors
///
/// Returns an error if the query fails or a stored status is corrupt.
pub fn count_by_status_grouped(
    conn: &mut SqliteConnection,
) -> Result<Vec<(ComplaintStatus, i64)>, PersistenceError> {
    let rows: Vec<(String, i64)> = complaints::table
        .group_by(complaints::status)
        .select((complaints::status, count_star()))
        .load(conn)?;

    rows.into_iter()
        .map(|(status, count)| {
            let status: ComplaintStatus = parse_stored(&status, "complaints.status")?;
            Ok((status, count))
        })
        .collect()
}
