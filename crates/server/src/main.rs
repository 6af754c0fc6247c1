// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::format_description::well_known::Iso8601;
use tokio::sync::Mutex;
use tracing::{error, info};

use resolveit_domain::{
    Category, Complaint, ComplaintDraft, ComplaintStatus, DomainError, InternalNote, Priority,
    Role, StatusHistory, User, validate_complaint_draft, validate_note_text,
    validate_resolution_text, validate_user_fields,
};
use resolveit_notify::LogNotifier;
use resolveit_persistence::Store;
use resolveit_service::{
    ComplaintFilter, ComplaintService, Page, PageRequest, ServiceError, SystemClock,
};

/// ResolveIt Server - HTTP server for the complaint tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// The lifecycle manager wired with production collaborators.
type Service = ComplaintService<SystemClock, LogNotifier>;

/// Application state shared across handlers.
///
/// The store is wrapped in a Mutex to allow safe concurrent access; the
/// lifecycle manager itself is stateless apart from its collaborators.
#[derive(Clone)]
struct AppState {
    store: Arc<Mutex<Store>>,
    service: Arc<Service>,
}

// ============================================================================
// Request / response DTOs
// ============================================================================

/// API request for creating a user.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateUserApiRequest {
    first_name: String,
    last_name: String,
    email: String,
    /// One of `user`, `staff`, `admin`.
    role: String,
}

/// Serializable representation of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserResponse {
    user_id: i64,
    first_name: String,
    last_name: String,
    email: String,
    role: String,
}

/// API response for listing users.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListUsersApiResponse {
    users: Vec<UserResponse>,
}

/// API request for filing a complaint.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateComplaintApiRequest {
    /// The filing user's ID.
    actor_id: i64,
    title: String,
    description: String,
    /// One of `technical`, `billing`, `service`, `general`, `urgent`.
    category: String,
    /// One of `low`, `medium`, `high`, `critical`. Defaults to `medium`.
    #[serde(default)]
    priority: Option<String>,
}

/// Serializable representation of a complaint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ComplaintResponse {
    complaint_id: i64,
    title: String,
    description: String,
    category: String,
    priority: String,
    status: String,
    user_id: i64,
    assigned_to: Option<i64>,
    created_at: String,
    updated_at: String,
    resolved_at: Option<String>,
    resolution: Option<String>,
}

/// One page of complaints.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ComplaintPageResponse {
    items: Vec<ComplaintResponse>,
    total: i64,
    page: i64,
    per_page: i64,
}

/// Query parameters for listing complaints.
///
/// At most one filter criterion may be supplied.
#[derive(Debug, Deserialize)]
struct ListComplaintsQuery {
    user_id: Option<i64>,
    assigned_to: Option<i64>,
    status: Option<String>,
    category: Option<String>,
    priority: Option<String>,
    page: Option<i64>,
    per_page: Option<i64>,
}

/// Query parameters for keyword search.
#[derive(Debug, Deserialize)]
struct SearchQuery {
    keyword: String,
    page: Option<i64>,
    per_page: Option<i64>,
}

/// Query parameters for date-range listing.
#[derive(Debug, Deserialize)]
struct DateRangeQuery {
    /// Inclusive lower bound (ISO 8601).
    start: String,
    /// Inclusive upper bound (ISO 8601).
    end: String,
}

/// API request for a status transition.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateStatusApiRequest {
    /// The acting user's ID.
    actor_id: i64,
    /// The new status.
    status: String,
    /// Free text describing the change, recorded in the history entry.
    notes: String,
    /// Optional resolution summary, recorded on the complaint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    resolution: Option<String>,
}

/// API request for assigning a complaint.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AssignApiRequest {
    /// The acting user's ID.
    actor_id: i64,
    /// The staff user receiving the assignment.
    assignee_id: i64,
}

/// API request for attaching a note.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AddNoteApiRequest {
    /// The authoring user's ID.
    actor_id: i64,
    note: String,
    is_public: bool,
}

/// Serializable representation of an internal note.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NoteResponse {
    note_id: i64,
    complaint_id: i64,
    note: String,
    created_by: i64,
    created_at: String,
    is_public: bool,
}

/// Query parameters for listing notes.
#[derive(Debug, Deserialize)]
struct NotesQuery {
    /// Restrict to public notes (the filer-visible view).
    public_only: Option<bool>,
}

/// Serializable representation of a status history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HistoryEntryResponse {
    history_id: i64,
    complaint_id: i64,
    status: String,
    changed_by: i64,
    notes: String,
    created_at: String,
}

/// API response for listing history.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HistoryApiResponse {
    history: Vec<HistoryEntryResponse>,
}

/// One grouped count, keyed by the enum's string form.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GroupedCountResponse {
    key: String,
    count: i64,
}

/// Query parameters for the single-status count endpoint.
#[derive(Debug, Deserialize)]
struct CountQuery {
    status: String,
}

/// API response for the single-status count endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CountResponse {
    status: String,
    count: i64,
}

/// API response for write operations with no body to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WriteResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    error: bool,
    message: String,
}

// ============================================================================
// Error handling
// ============================================================================

/// Boundary-layer validation failures, surfaced as HTTP 400.
///
/// Field-constraint and enum-membership checks happen here before a
/// request reaches the lifecycle manager; the manager itself assumes
/// pre-validated input.
#[derive(Debug, Error)]
enum RequestValidationError {
    /// A field failed validation.
    #[error("Invalid value for field '{field}': {message}")]
    InvalidField { field: String, message: String },

    /// More than one list filter was supplied.
    #[error(
        "At most one of user_id, assigned_to, status, category, priority may be supplied"
    )]
    ConflictingFilters,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    fn not_found(message: String) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<RequestValidationError> for HttpError {
    fn from(err: RequestValidationError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::ComplaintNotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ServiceError::Persistence(_) | ServiceError::Time(_) => {
                error!(error = %err, "Lifecycle operation failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<resolveit_persistence::PersistenceError> for HttpError {
    fn from(err: resolveit_persistence::PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Parses an enum-valued request field, reporting failures as 400s.
fn parse_field<T>(value: &str, field: &str) -> Result<T, HttpError>
where
    T: FromStr<Err = DomainError>,
{
    value.parse::<T>().map_err(|e| {
        RequestValidationError::InvalidField {
            field: field.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Maps a domain validation failure onto a 400 for the named field.
fn reject_invalid(field: &str, err: &DomainError) -> HttpError {
    RequestValidationError::InvalidField {
        field: field.to_string(),
        message: err.to_string(),
    }
    .into()
}

/// Parses and normalizes an ISO 8601 bound for date-range queries.
///
/// Bounds are re-formatted into the storage timestamp format so that the
/// store's lexicographic comparison lines up with chronological order.
fn parse_timestamp_bound(value: &str, field: &str) -> Result<String, HttpError> {
    let parsed = time::OffsetDateTime::parse(value, &Iso8601::DEFAULT).map_err(|e| {
        HttpError::from(RequestValidationError::InvalidField {
            field: field.to_string(),
            message: format!("'{value}' is not an ISO 8601 timestamp: {e}"),
        })
    })?;

    parsed.format(&Iso8601::DEFAULT).map_err(|e| HttpError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: format!("Failed to format timestamp: {e}"),
    })
}

/// Loads a user by ID, reporting a missing user as a 404.
fn load_user(store: &mut Store, user_id: i64) -> Result<User, HttpError> {
    store
        .get_user(user_id)?
        .ok_or_else(|| HttpError::not_found(format!("User {user_id} not found")))
}

// ============================================================================
// Response conversions
// ============================================================================

fn user_to_response(user: User) -> UserResponse {
    UserResponse {
        user_id: user.user_id,
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
        role: user.role.as_str().to_string(),
    }
}

fn complaint_to_response(complaint: Complaint) -> ComplaintResponse {
    ComplaintResponse {
        complaint_id: complaint.complaint_id,
        title: complaint.title,
        description: complaint.description,
        category: complaint.category.as_str().to_string(),
        priority: complaint.priority.as_str().to_string(),
        status: complaint.status.as_str().to_string(),
        user_id: complaint.user_id,
        assigned_to: complaint.assigned_to,
        created_at: complaint.created_at,
        updated_at: complaint.updated_at,
        resolved_at: complaint.resolved_at,
        resolution: complaint.resolution,
    }
}

fn page_to_response(page: Page<Complaint>) -> ComplaintPageResponse {
    ComplaintPageResponse {
        items: page.items.into_iter().map(complaint_to_response).collect(),
        total: page.total,
        page: page.page,
        per_page: page.per_page,
    }
}

fn note_to_response(note: InternalNote) -> NoteResponse {
    NoteResponse {
        note_id: note.note_id,
        complaint_id: note.complaint_id,
        note: note.note,
        created_by: note.created_by,
        created_at: note.created_at,
        is_public: note.is_public,
    }
}

fn history_to_response(entry: StatusHistory) -> HistoryEntryResponse {
    HistoryEntryResponse {
        history_id: entry.history_id,
        complaint_id: entry.complaint_id,
        status: entry.status.as_str().to_string(),
        changed_by: entry.changed_by,
        notes: entry.notes,
        created_at: entry.created_at,
    }
}

fn page_request_from(page: Option<i64>, per_page: Option<i64>) -> PageRequest {
    PageRequest::new(page.unwrap_or(0), per_page.unwrap_or(20))
}

// ============================================================================
// User handlers
// ============================================================================

/// Handler for POST `/users` endpoint.
async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateUserApiRequest>,
) -> Result<Json<UserResponse>, HttpError> {
    info!(email = %req.email, role = %req.role, "Handling create_user request");

    let role: Role = parse_field(&req.role, "role")?;
    let candidate = User {
        user_id: 0,
        first_name: req.first_name.clone(),
        last_name: req.last_name.clone(),
        email: req.email.clone(),
        role,
    };
    validate_user_fields(&candidate).map_err(|e| reject_invalid("user", &e))?;

    let mut store = app_state.store.lock().await;

    if store.get_user_by_email(&req.email)?.is_some() {
        return Err(HttpError {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: format!("A user with email '{}' already exists", req.email),
        });
    }

    let user_id: i64 = store.insert_user(&resolveit_persistence::NewUserRow {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        role: role.as_str().to_string(),
    })?;
    let user: User = load_user(&mut store, user_id)?;
    drop(store);

    info!(user_id = user_id, "User created");

    Ok(Json(user_to_response(user)))
}

/// Handler for GET `/users` endpoint.
async fn handle_list_users(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListUsersApiResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let users = store.list_users()?;
    drop(store);

    Ok(Json(ListUsersApiResponse {
        users: users.into_iter().map(user_to_response).collect(),
    }))
}

// ============================================================================
// Complaint handlers
// ============================================================================

/// Handler for POST `/complaints` endpoint.
///
/// Files a new complaint on behalf of the acting user.
async fn handle_create_complaint(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateComplaintApiRequest>,
) -> Result<Json<ComplaintResponse>, HttpError> {
    info!(
        actor_id = req.actor_id,
        category = %req.category,
        "Handling create_complaint request"
    );

    let category: Category = parse_field(&req.category, "category")?;
    let priority: Priority = match req.priority.as_deref() {
        Some(value) => parse_field(value, "priority")?,
        None => Priority::default(),
    };

    let draft = ComplaintDraft {
        title: req.title,
        description: req.description,
        category,
        priority,
    };
    validate_complaint_draft(&draft).map_err(|e| reject_invalid("complaint", &e))?;

    let mut store = app_state.store.lock().await;
    let filer: User = load_user(&mut store, req.actor_id)?;
    let complaint: Complaint = app_state.service.create(&mut store, draft, &filer)?;
    drop(store);

    Ok(Json(complaint_to_response(complaint)))
}

/// Handler for GET `/complaints` endpoint.
///
/// Paginated listing with at most one filter criterion.
async fn handle_list_complaints(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListComplaintsQuery>,
) -> Result<Json<ComplaintPageResponse>, HttpError> {
    let mut filters: Vec<ComplaintFilter> = Vec::new();
    if let Some(user_id) = query.user_id {
        filters.push(ComplaintFilter::ByUser(user_id));
    }
    if let Some(assigned_to) = query.assigned_to {
        filters.push(ComplaintFilter::ByAssignee(assigned_to));
    }
    if let Some(status) = &query.status {
        filters.push(ComplaintFilter::ByStatus(parse_field(status, "status")?));
    }
    if let Some(category) = &query.category {
        filters.push(ComplaintFilter::ByCategory(parse_field(
            category, "category",
        )?));
    }
    if let Some(priority) = &query.priority {
        filters.push(ComplaintFilter::ByPriority(parse_field(
            priority, "priority",
        )?));
    }

    if filters.len() > 1 {
        return Err(RequestValidationError::ConflictingFilters.into());
    }
    let filter: ComplaintFilter = filters.pop().unwrap_or(ComplaintFilter::All);
    let page: PageRequest = page_request_from(query.page, query.per_page);

    let mut store = app_state.store.lock().await;
    let result = app_state.service.list(&mut store, &filter, page)?;
    drop(store);

    Ok(Json(page_to_response(result)))
}

/// Handler for GET `/complaints/search` endpoint.
async fn handle_search_complaints(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ComplaintPageResponse>, HttpError> {
    let page: PageRequest = page_request_from(query.page, query.per_page);

    let mut store = app_state.store.lock().await;
    let result = app_state.service.search(&mut store, &query.keyword, page)?;
    drop(store);

    Ok(Json(page_to_response(result)))
}

/// Handler for GET `/complaints/date_range` endpoint.
async fn handle_list_by_date_range(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<Vec<ComplaintResponse>>, HttpError> {
    let start: String = parse_timestamp_bound(&query.start, "start")?;
    let end: String = parse_timestamp_bound(&query.end, "end")?;

    let mut store = app_state.store.lock().await;
    let complaints = app_state
        .service
        .list_by_date_range(&mut store, &start, &end)?;
    drop(store);

    Ok(Json(
        complaints.into_iter().map(complaint_to_response).collect(),
    ))
}

/// Handler for GET `/complaints/{id}` endpoint.
async fn handle_get_complaint(
    AxumState(app_state): AxumState<AppState>,
    Path(complaint_id): Path<i64>,
) -> Result<Json<ComplaintResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let complaint = app_state.service.find_by_id(&mut store, complaint_id)?;
    drop(store);

    complaint.map(complaint_to_response).map(Json).ok_or_else(|| {
        HttpError::not_found(format!("Complaint {complaint_id} not found"))
    })
}

/// Handler for PUT `/complaints/{id}/status` endpoint.
async fn handle_update_status(
    AxumState(app_state): AxumState<AppState>,
    Path(complaint_id): Path<i64>,
    Json(req): Json<UpdateStatusApiRequest>,
) -> Result<Json<ComplaintResponse>, HttpError> {
    info!(
        complaint_id = complaint_id,
        actor_id = req.actor_id,
        status = %req.status,
        "Handling update_status request"
    );

    let new_status: ComplaintStatus = parse_field(&req.status, "status")?;
    if let Some(resolution) = &req.resolution {
        validate_resolution_text(resolution).map_err(|e| reject_invalid("resolution", &e))?;
    }

    let mut store = app_state.store.lock().await;
    let actor: User = load_user(&mut store, req.actor_id)?;
    let complaint: Complaint = app_state.service.transition_status(
        &mut store,
        complaint_id,
        new_status,
        &actor,
        &req.notes,
        req.resolution,
    )?;
    drop(store);

    Ok(Json(complaint_to_response(complaint)))
}

/// Handler for PUT `/complaints/{id}/assign` endpoint.
async fn handle_assign_complaint(
    AxumState(app_state): AxumState<AppState>,
    Path(complaint_id): Path<i64>,
    Json(req): Json<AssignApiRequest>,
) -> Result<Json<ComplaintResponse>, HttpError> {
    info!(
        complaint_id = complaint_id,
        actor_id = req.actor_id,
        assignee_id = req.assignee_id,
        "Handling assign_complaint request"
    );

    let mut store = app_state.store.lock().await;
    let actor: User = load_user(&mut store, req.actor_id)?;
    let assignee: User = load_user(&mut store, req.assignee_id)?;
    let complaint: Complaint =
        app_state
            .service
            .assign(&mut store, complaint_id, &assignee, &actor)?;
    drop(store);

    Ok(Json(complaint_to_response(complaint)))
}

/// Handler for POST `/complaints/{id}/notes` endpoint.
async fn handle_add_note(
    AxumState(app_state): AxumState<AppState>,
    Path(complaint_id): Path<i64>,
    Json(req): Json<AddNoteApiRequest>,
) -> Result<Json<NoteResponse>, HttpError> {
    info!(
        complaint_id = complaint_id,
        actor_id = req.actor_id,
        is_public = req.is_public,
        "Handling add_note request"
    );

    validate_note_text(&req.note).map_err(|e| reject_invalid("note", &e))?;

    let mut store = app_state.store.lock().await;
    let author: User = load_user(&mut store, req.actor_id)?;
    let note: InternalNote = app_state.service.add_note(
        &mut store,
        complaint_id,
        &req.note,
        &author,
        req.is_public,
    )?;
    drop(store);

    Ok(Json(note_to_response(note)))
}

/// Handler for GET `/complaints/{id}/notes` endpoint.
async fn handle_get_notes(
    AxumState(app_state): AxumState<AppState>,
    Path(complaint_id): Path<i64>,
    Query(query): Query<NotesQuery>,
) -> Result<Json<Vec<NoteResponse>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let notes = app_state.service.notes(
        &mut store,
        complaint_id,
        query.public_only.unwrap_or(false),
    )?;
    drop(store);

    Ok(Json(notes.into_iter().map(note_to_response).collect()))
}

/// Handler for GET `/complaints/{id}/history` endpoint.
async fn handle_get_history(
    AxumState(app_state): AxumState<AppState>,
    Path(complaint_id): Path<i64>,
) -> Result<Json<HistoryApiResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let history = app_state.service.history(&mut store, complaint_id)?;
    drop(store);

    Ok(Json(HistoryApiResponse {
        history: history.into_iter().map(history_to_response).collect(),
    }))
}

/// Handler for DELETE `/complaints/{id}` endpoint.
async fn handle_delete_complaint(
    AxumState(app_state): AxumState<AppState>,
    Path(complaint_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(complaint_id = complaint_id, "Handling delete_complaint request");

    let mut store = app_state.store.lock().await;
    app_state.service.delete(&mut store, complaint_id)?;
    drop(store);

    Ok(Json(WriteResponse {
        success: true,
        message: Some(format!("Deleted complaint {complaint_id}")),
    }))
}

// ============================================================================
// Stats handlers
// ============================================================================

/// Handler for GET `/stats/by_status` endpoint.
async fn handle_stats_by_status(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<GroupedCountResponse>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let counts = app_state.service.count_grouped_by_status(&mut store)?;
    drop(store);

    Ok(Json(
        counts
            .into_iter()
            .map(|(status, count)| GroupedCountResponse {
                key: status.as_str().to_string(),
                count,
            })
            .collect(),
    ))
}

/// Handler for GET `/stats/by_category` endpoint.
async fn handle_stats_by_category(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<GroupedCountResponse>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let counts = app_state.service.count_grouped_by_category(&mut store)?;
    drop(store);

    Ok(Json(
        counts
            .into_iter()
            .map(|(category, count)| GroupedCountResponse {
                key: category.as_str().to_string(),
                count,
            })
            .collect(),
    ))
}

/// Handler for GET `/stats/count` endpoint.
async fn handle_count_by_status(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<CountQuery>,
) -> Result<Json<CountResponse>, HttpError> {
    let status: ComplaintStatus = parse_field(&query.status, "status")?;

    let mut store = app_state.store.lock().await;
    let count = app_state.service.count_by_status(&mut store, status)?;
    drop(store);

    Ok(Json(CountResponse {
        status: status.as_str().to_string(),
        count,
    }))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/users", post(handle_create_user))
        .route("/users", get(handle_list_users))
        .route("/complaints", post(handle_create_complaint))
        .route("/complaints", get(handle_list_complaints))
        .route("/complaints/search", get(handle_search_complaints))
        .route("/complaints/date_range", get(handle_list_by_date_range))
        .route("/complaints/{id}", get(handle_get_complaint))
        .route("/complaints/{id}", delete(handle_delete_complaint))
        .route("/complaints/{id}/status", put(handle_update_status))
        .route("/complaints/{id}/assign", put(handle_assign_complaint))
        .route("/complaints/{id}/notes", post(handle_add_note))
        .route("/complaints/{id}/notes", get(handle_get_notes))
        .route("/complaints/{id}/history", get(handle_get_history))
        .route("/stats/by_status", get(handle_stats_by_status))
        .route("/stats/by_category", get(handle_stats_by_category))
        .route("/stats/count", get(handle_count_by_status))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing ResolveIt Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let store: Store = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Store::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Store::new_in_memory()?
    };

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
        service: Arc::new(ComplaintService::new(SystemClock, LogNotifier)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
