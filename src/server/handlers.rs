//! Generic HTTP handlers shared by every entity kind
//!
//! Handlers only translate: request extraction failures become
//! `InvalidInput`, service results become status codes. Bodies are empty on
//! error unless detailed errors are enabled.

use crate::config::PaginationConfig;
use crate::core::entity::EntityKind;
use crate::core::error::ServiceError;
use crate::core::query::{Page, PageParams};
use crate::core::record::RecordId;
use crate::core::service::CrudService;
use axum::{
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

/// Per-kind handler state
pub struct CrudState<E: EntityKind> {
    pub service: Arc<dyn CrudService<E>>,
    pub pagination: PaginationConfig,
    pub detailed_errors: bool,
}

impl<E: EntityKind> Clone for CrudState<E> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            pagination: self.pagination.clone(),
            detailed_errors: self.detailed_errors,
        }
    }
}

impl<E: EntityKind> CrudState<E> {
    fn fail(&self, err: ServiceError) -> Response {
        err.into_http_response(self.detailed_errors)
    }
}

type ApiResult<T> = Result<T, Response>;

fn parse_id<E: EntityKind>(state: &CrudState<E>, raw: &str) -> ApiResult<RecordId> {
    raw.parse::<RecordId>().map_err(|_| {
        state.fail(ServiceError::invalid(
            E::TYPE_NAME,
            "id",
            format!("'{raw}' is not a valid identifier"),
        ))
    })
}

fn parse_body<E: EntityKind>(
    state: &CrudState<E>,
    payload: Result<Json<Option<E::Wire>>, JsonRejection>,
) -> ApiResult<Option<E::Wire>> {
    match payload {
        Ok(Json(wire)) => Ok(wire),
        Err(rejection) => Err(state.fail(ServiceError::invalid(
            E::TYPE_NAME,
            "body",
            rejection.body_text(),
        ))),
    }
}

pub async fn list<E: EntityKind>(State(state): State<CrudState<E>>) -> ApiResult<Json<Vec<E::Wire>>> {
    let wires = state.service.find_all().await.map_err(|e| state.fail(e))?;
    Ok(Json(wires))
}

pub async fn paginated<E: EntityKind>(
    State(state): State<CrudState<E>>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> ApiResult<Json<Page<E::Wire>>> {
    let Query(params) = params.map_err(|rejection| {
        state.fail(ServiceError::invalid(
            E::TYPE_NAME,
            "query",
            rejection.body_text(),
        ))
    })?;

    let request = params.resolve(state.pagination.default_size, state.pagination.max_size);
    let page = state
        .service
        .find_all_paginated(request)
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(page))
}

pub async fn get_one<E: EntityKind>(
    State(state): State<CrudState<E>>,
    Path(id): Path<String>,
) -> ApiResult<Json<E::Wire>> {
    let id = parse_id(&state, &id)?;
    match state.service.find_by_id(id).await {
        Ok(Some(wire)) => Ok(Json(wire)),
        Ok(None) => Err(state.fail(ServiceError::not_found(E::TYPE_NAME, id))),
        Err(e) => Err(state.fail(e)),
    }
}

pub async fn create<E: EntityKind>(
    State(state): State<CrudState<E>>,
    payload: Result<Json<Option<E::Wire>>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<E::Wire>)> {
    let wire = parse_body(&state, payload)?;
    let saved = state.service.save(wire).await.map_err(|e| state.fail(e))?;
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn update<E: EntityKind>(
    State(state): State<CrudState<E>>,
    Path(id): Path<String>,
    payload: Result<Json<Option<E::Wire>>, JsonRejection>,
) -> ApiResult<Json<E::Wire>> {
    let id = parse_id(&state, &id)?;
    let wire = parse_body(&state, payload)?;
    let updated = state
        .service
        .update(id, wire)
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(updated))
}

pub async fn delete<E: EntityKind>(
    State(state): State<CrudState<E>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&state, &id)?;
    state
        .service
        .delete_by_id(id)
        .await
        .map_err(|e| state.fail(e))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn by_status<E: EntityKind>(
    State(state): State<CrudState<E>>,
    Path(status): Path<String>,
) -> ApiResult<Json<Vec<E::Wire>>> {
    let wires = state
        .service
        .find_by_status(&status)
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(wires))
}

pub async fn health<E: EntityKind>() -> impl IntoResponse {
    format!("{} service is healthy", E::DISPLAY_NAME)
}
