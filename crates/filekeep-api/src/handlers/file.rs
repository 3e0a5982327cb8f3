//! File handlers: create, read, list, publish and content.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use filekeep_service::CreateFileRequest;

use crate::dto::FileResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, DataQuery, ListQuery, MaybeUser};
use crate::state::AppState;

/// POST /files
pub async fn create_file(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<CreateFileRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FileResponse>), ApiError> {
    let Json(req) = body?;
    let file = state.files.create_file(&auth.user.id, req).await?;
    Ok((StatusCode::CREATED, Json(FileResponse::created(file))))
}

/// GET /files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileResponse>, ApiError> {
    let file = state.files.get_file(&auth.user.id, &id).await?;
    Ok(Json(file.into()))
}

/// GET /files?parentId=&page=
pub async fn list_files(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<FileResponse>>, ApiError> {
    let files = state
        .files
        .list_files(&auth.user.id, &query.parent(), query.page())
        .await?;
    Ok(Json(files.into_iter().map(FileResponse::from).collect()))
}

/// PUT /files/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileResponse>, ApiError> {
    let file = state.files.set_visibility(&auth.user.id, &id, true).await?;
    Ok(Json(file.into()))
}

/// PUT /files/{id}/unpublish
pub async fn unpublish(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileResponse>, ApiError> {
    let file = state.files.set_visibility(&auth.user.id, &id, false).await?;
    Ok(Json(file.into()))
}

/// GET /files/{id}/data?size=
pub async fn get_content(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<String>,
    Query(query): Query<DataQuery>,
) -> Result<Response, ApiError> {
    let requester = user.as_ref().map(|u| &u.id);
    let content = state
        .files
        .read_file_content(requester, &id, query.size.as_deref())
        .await?;

    Ok((
        [(header::CONTENT_TYPE, content.content_type)],
        content.data,
    )
        .into_response())
}
