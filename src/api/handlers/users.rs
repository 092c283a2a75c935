use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::response::ApiResponse;
use crate::domain::repositories::{FilterCriteria, UserRepository};
use crate::domain::user::{Role, Status, User, UserDraft, UserPatch, UserPayload};

/// Shared handle to the record store, injected as router state
pub type UserStore = Arc<dyn UserRepository>;

/// Query parameters accepted by the collection endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub department: Option<String>,
}

impl ListQuery {
    /// Search text, with the empty value treated as absent
    fn search_text(&self) -> Option<&str> {
        non_empty(&self.search)
    }

    /// Parses the narrowing parameters into store criteria
    ///
    /// Empty values count as absent; an unknown role or status value is
    /// rejected here instead of silently matching nothing.
    fn criteria(&self) -> Result<FilterCriteria, ApiError> {
        let role = match non_empty(&self.role) {
            Some(value) => Some(value.parse::<Role>().map_err(ApiError::bad_request)?),
            None => None,
        };
        let status = match non_empty(&self.status) {
            Some(value) => Some(value.parse::<Status>().map_err(ApiError::bad_request)?),
            None => None,
        };

        Ok(FilterCriteria {
            role,
            status,
            department: non_empty(&self.department).map(str::to_string),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

/// List the directory, optionally narrowed by search text and field filters
///
/// GET /api/users
pub async fn list_users(
    State(store): State<UserStore>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let criteria = query.criteria()?;

    // Search picks the base set, then the criteria narrow it.
    let users = match query.search_text() {
        Some(text) => {
            let mut hits = store.search(text).await?;
            if !criteria.is_empty() {
                hits.retain(|user| criteria.matches(user));
            }
            hits
        }
        None if criteria.is_empty() => store.list().await?,
        None => store.filter(&criteria).await?,
    };

    let count = users.len();
    Ok(Json(ApiResponse::list(users, count)))
}

/// Fetch one record by id
///
/// GET /api/users/:id
pub async fn get_user(
    State(store): State<UserStore>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = store
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(ApiResponse::data(user)))
}

/// Create a record from a validated body
///
/// POST /api/users
pub async fn create_user(
    State(store): State<UserStore>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    let Json(payload) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let draft = UserDraft::try_from(payload).map_err(ApiError::validation)?;

    let user = store.create(draft).await?;
    tracing::info!(id = %user.id, "user created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(user, "User created successfully")),
    ))
}

/// Replace a record after full-body validation
///
/// PUT /api/users/:id
pub async fn update_user(
    State(store): State<UserStore>,
    Path(id): Path<String>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let Json(payload) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    // Same full-body rules as create; a body-supplied id is ignored, the
    // path decides which record is touched.
    let draft = UserDraft::try_from(payload).map_err(ApiError::validation)?;

    let user = store
        .update(&id, UserPatch::from(draft))
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    tracing::info!(id = %user.id, "user updated");

    Ok(Json(ApiResponse::with_message(
        user,
        "User updated successfully",
    )))
}

/// Remove a record
///
/// DELETE /api/users/:id
pub async fn delete_user(
    State(store): State<UserStore>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !store.delete(&id).await? {
        return Err(ApiError::not_found("User not found"));
    }
    tracing::info!(%id, "user deleted");

    Ok(Json(ApiResponse::message("User deleted successfully")))
}
