use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use standard_error::{StandardError, Status};
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::jobs::{mutators::JobMutator, selectors::JobSelector, spec::JobFilter},
            auth::Claims,
        },
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

#[derive(Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateJobInput {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(range(min = 0))]
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

#[derive(Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PatchJobInput {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(range(min = 0))]
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
}

fn bad_input(err: impl std::fmt::Display) -> StandardError {
    StandardError::new(&format!("ERR-JOBS-400: invalid job payload: {}", err))
        .code(StatusCode::BAD_REQUEST)
}

fn not_found(id: i32) -> StandardError {
    StandardError::new(&format!("ERR-JOBS-404: no job: id of {}", id)).code(StatusCode::NOT_FOUND)
}

fn check_min_salary(filter: &JobFilter) -> Result<()> {
    match filter.min_salary {
        // inherited contract: a negative minSalary answers 404, not 400
        Some(min_salary) if min_salary < Decimal::ZERO => Err(StandardError::new(
            "ERR-JOBS-404: minSalary must be greater than 0",
        )
        .code(StatusCode::NOT_FOUND)),
        _ => Ok(()),
    }
}

fn check_equity(equity: &Option<Decimal>) -> Result<()> {
    match equity {
        Some(e) if *e < Decimal::ZERO || *e > Decimal::ONE => Err(StandardError::new(
            "ERR-JOBS-400: equity must be between 0 and 1",
        )
        .code(StatusCode::BAD_REQUEST)),
        _ => Ok(()),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Arc<Claims>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse> {
    let input: CreateJobInput = serde_json::from_value(body).map_err(bad_input)?;
    input.validate().map_err(bad_input)?;
    check_equity(&input.equity)?;
    let mut tx = state.db_pool.begin_txn().await?;
    let job = JobMutator::new(&mut tx).create(input).await?;
    tx.commit().await?;
    tracing::info!("job {} created by {}", job.id, claims.username);
    Ok((StatusCode::CREATED, Json(json!({ "job": job }))))
}

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<JobFilter>,
) -> Result<Json<Value>> {
    check_min_salary(&filter)?;
    let mut tx = state.db_pool.begin_txn().await?;
    let mut selector = JobSelector::new(&mut tx);
    let jobs = if filter.is_active() {
        selector.filter(&filter).await?
    } else {
        selector.get_all().await?
    };
    Ok(Json(json!({ "jobs": jobs })))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Value>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let job = JobSelector::new(&mut tx)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(json!({ "job": job })))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Arc<Claims>>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<Json<Value>> {
    let input: PatchJobInput = serde_json::from_value(body).map_err(bad_input)?;
    input.validate().map_err(bad_input)?;
    check_equity(&input.equity)?;
    let mut tx = state.db_pool.begin_txn().await?;
    let job = JobMutator::new(&mut tx)
        .update(id, input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tx.commit().await?;
    tracing::info!("job {} updated by {}", id, claims.username);
    Ok(Json(json!({ "job": job })))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(claims): Extension<Arc<Claims>>,
    Path(id): Path<i32>,
) -> Result<Json<Value>> {
    let mut tx = state.db_pool.begin_txn().await?;
    if !JobMutator::new(&mut tx).delete(id).await? {
        return Err(not_found(id));
    }
    tx.commit().await?;
    tracing::info!("job {} deleted by {}", id, claims.username);
    Ok(Json(json!({ "deleted": id.to_string() })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_unknown_fields() {
        let body = json!({
            "title": "new",
            "salary": 10,
            "equity": "0.1",
            "company_handle": "c1",
            "id": 7
        });
        assert!(serde_json::from_value::<CreateJobInput>(body).is_err());
    }

    #[test]
    fn test_patch_cannot_move_job_to_another_company() {
        let body = json!({ "title": "New", "company_handle": "c2" });
        assert!(serde_json::from_value::<PatchJobInput>(body).is_err());
    }

    #[test]
    fn test_equity_accepts_number_or_string() {
        let a: CreateJobInput = serde_json::from_value(json!({
            "title": "new", "equity": 0.5, "company_handle": "c1"
        }))
        .unwrap();
        let b: CreateJobInput = serde_json::from_value(json!({
            "title": "new", "equity": "0.5", "company_handle": "c1"
        }))
        .unwrap();
        assert_eq!(a.equity, b.equity);
        assert!(a.salary.is_none());
    }

    #[test]
    fn test_equity_bounds() {
        assert!(check_equity(&Some(Decimal::new(15, 1))).is_err());
        assert!(check_equity(&Some(Decimal::ONE)).is_ok());
        assert!(check_equity(&Some(Decimal::ZERO)).is_ok());
        assert!(check_equity(&None).is_ok());
    }

    #[test]
    fn test_negative_min_salary_answers_not_found() {
        for threshold in [Decimal::from(-1), Decimal::new(-5, 1)] {
            let filter = JobFilter {
                min_salary: Some(threshold),
                ..Default::default()
            };
            let err = check_min_salary(&filter).unwrap_err();
            assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
        }
        let zero = JobFilter {
            min_salary: Some(Decimal::ZERO),
            ..Default::default()
        };
        assert!(check_min_salary(&zero).is_ok());
        assert!(check_min_salary(&JobFilter::default()).is_ok());
    }

    #[test]
    fn test_title_must_not_be_empty() {
        let input: CreateJobInput =
            serde_json::from_value(json!({ "title": "", "company_handle": "c1" })).unwrap();
        assert!(input.validate().is_err());
    }
}
