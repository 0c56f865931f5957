//! HTTP API for the vendor console.
//!
//! Every route lives under `/api`:
//! - `POST /auth/login` - Check administrator credentials
//! - `GET|POST /departments`, `GET|PUT|DELETE /departments/{id}`
//! - `GET|POST /employees`, `GET|PUT|DELETE /employees/{id}`
//! - `GET /employees/{id}/projects` - Projects an employee works on
//! - `POST|DELETE /employees/{id}/projects/{project_id}` - Assign / unassign
//! - `GET|POST /projects`, `GET|PUT|DELETE /projects/{id}`
//! - `GET|POST /users`, `GET|PUT|DELETE /users/{id}` - Administrators
//! - `GET /dashboard/stats` - Aggregate counts for the dashboard
//! - `GET /test` - Storage connectivity probe
//!
//! Any other method or path answers 404 `{"message":"Not found"}`.

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::Database;

mod assignments;
mod auth;
mod dashboard;
mod departments;
mod employees;
pub mod error;
mod extract;
mod projects;
mod users;

pub use error::{ApiError, ApiResult};

/// State shared by every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// The route table, relative to `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login).fallback(not_found))
        .route("/test", get(dashboard::connection_test).fallback(not_found))
        .route(
            "/dashboard/stats",
            get(dashboard::dashboard_stats).fallback(not_found),
        )
        .route(
            "/departments",
            get(departments::list_departments)
                .post(departments::create_department)
                .fallback(not_found),
        )
        .route(
            "/departments/{id}",
            get(departments::get_department)
                .put(departments::update_department)
                .delete(departments::delete_department)
                .fallback(not_found),
        )
        .route(
            "/employees",
            get(employees::list_employees)
                .post(employees::create_employee)
                .fallback(not_found),
        )
        .route(
            "/employees/{id}",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee)
                .fallback(not_found),
        )
        .route(
            "/employees/{id}/projects",
            get(assignments::list_employee_projects).fallback(not_found),
        )
        .route(
            "/employees/{id}/projects/{project_id}",
            post(assignments::assign_project)
                .delete(assignments::unassign_project)
                .fallback(not_found),
        )
        .route(
            "/projects",
            get(projects::list_projects)
                .post(projects::create_project)
                .fallback(not_found),
        )
        .route(
            "/projects/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project)
                .fallback(not_found),
        )
        .route(
            "/users",
            get(users::list_users)
                .post(users::create_user)
                .fallback(not_found),
        )
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user)
                .fallback(not_found),
        )
}

/// The complete application: routes nested under `/api`, request tracing
/// and an open CORS policy for the browser dashboard.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::route_not_found()
}

pub(crate) fn message(text: &str) -> Json<Value> {
    Json(json!({ "message": text }))
}

pub(crate) fn created(text: &str, id: i64) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(json!({ "message": text, "id": id })))
}
