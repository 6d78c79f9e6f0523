use axum::http::StatusCode;
use sqlx::PgConnection;
use standard_error::{StandardError, Status};

use crate::{
    pkg::{
        internal::{
            adaptors::{companies::selectors::CompanySelector, jobs::spec::JobEntry},
            sql::{SqlParam, partial_update},
        },
        server::handlers::jobs::{CreateJobInput, PatchJobInput},
    },
    prelude::Result,
};

const COLUMN_NAMES: &[(&str, &str)] = &[("companyHandle", "company_handle")];

fn no_such_company(handle: &str) -> StandardError {
    StandardError::new(&format!("ERR-JOBS-001: no company: {}", handle))
        .code(StatusCode::BAD_REQUEST)
}

pub struct JobMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&mut self, job: CreateJobInput) -> Result<JobEntry> {
        if !CompanySelector::new(&mut *self.pool)
            .exists(&job.company_handle)
            .await?
        {
            return Err(no_such_company(&job.company_handle));
        }
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (title, salary, equity, company_handle)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, salary, equity, company_handle
            "#,
        )
        .bind(&job.title)
        .bind(job.salary)
        .bind(job.equity)
        .bind(&job.company_handle)
        .fetch_one(&mut *self.pool)
        .await
        .map_err(|e| {
            // company deleted between the existence check and the insert
            if let sqlx::Error::Database(db) = &e {
                if db.code().as_deref() == Some("23503") {
                    return no_such_company(&job.company_handle);
                }
            }
            e.into()
        })?;
        Ok(row)
    }

    pub async fn update(&mut self, id: i32, job: PatchJobInput) -> Result<Option<JobEntry>> {
        let mut data: Vec<(&str, SqlParam)> = Vec::new();
        if let Some(title) = job.title {
            data.push(("title", SqlParam::Text(title)));
        }
        if let Some(salary) = job.salary {
            data.push(("salary", SqlParam::Int(salary)));
        }
        if let Some(equity) = job.equity {
            data.push(("equity", SqlParam::Numeric(equity)));
        }
        let fragment = partial_update(data, COLUMN_NAMES)?;
        let query = format!(
            "UPDATE jobs SET {} WHERE id = ${} RETURNING id, title, salary, equity, company_handle",
            fragment.set_clause,
            fragment.values.len() + 1
        );
        let mut q = sqlx::query_as::<_, JobEntry>(&query);
        for value in &fragment.values {
            q = match value {
                SqlParam::Text(v) => q.bind(v),
                SqlParam::Int(v) => q.bind(v),
                SqlParam::Numeric(v) => q.bind(v),
            };
        }
        let row = q.bind(id).fetch_optional(&mut *self.pool).await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use super::*;
    use crate::pkg::{
        internal::adaptors::jobs::{selectors::JobSelector, spec::JobFilter},
        server::state::{GetTxn, db_pool},
    };

    async fn seed(tx: &mut PgConnection) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO companies (handle, name, description, num_employees)
            VALUES ('c1', 'C1', 'Desc1', 1),
                   ('c2', 'C2', 'Desc2', 2),
                   ('c3', 'C3', 'Desc3', 3)
            "#,
        )
        .execute(&mut *tx)
        .await?;
        sqlx::query(
            r#"
            INSERT INTO jobs (title, salary, equity, company_handle)
            VALUES ('j1', 30000, 0, 'c1'),
                   ('j2', 40000, 0, 'c1'),
                   ('j3', 120000, 0.05, 'c1'),
                   ('j4', 20000, 0, 'c2'),
                   ('j5', 30000, 0, 'c2'),
                   ('j6', 130000, 0.1, 'c3'),
                   ('j7', 230000, 0.15, 'c3')
            "#,
        )
        .execute(&mut *tx)
        .await?;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running postgres and DATABASE_URL"]
    async fn test_filters_on_seed_dataset() -> Result<()> {
        let pool = Arc::new(db_pool()?);
        let mut tx = pool.begin_txn().await?;
        seed(&mut tx).await?;

        let by_salary = JobSelector::new(&mut tx)
            .filter(&JobFilter {
                min_salary: Some(Decimal::from(100000)),
                ..Default::default()
            })
            .await?;
        let titles: Vec<&str> = by_salary.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["j3", "j6", "j7"]);

        let with_equity = JobSelector::new(&mut tx)
            .filter(&JobFilter {
                has_equity: Some("true".into()),
                ..Default::default()
            })
            .await?;
        assert!(with_equity.iter().all(|j| j.equity.unwrap() > Decimal::ZERO));
        let titles: Vec<&str> = with_equity.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["j3", "j6", "j7"]);

        let combined = JobSelector::new(&mut tx)
            .filter(&JobFilter {
                title: Some("j".into()),
                min_salary: Some(Decimal::from(125000)),
                has_equity: Some("true".into()),
            })
            .await?;
        let titles: Vec<&str> = combined.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["j6", "j7"]);

        tx.rollback().await?;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running postgres and DATABASE_URL"]
    async fn test_create_update_delete_lifecycle() -> Result<()> {
        let pool = Arc::new(db_pool()?);
        let mut tx = pool.begin_txn().await?;
        seed(&mut tx).await?;

        let missing = JobMutator::new(&mut tx)
            .create(CreateJobInput {
                title: "new".into(),
                salary: Some(20),
                equity: Some(Decimal::ZERO),
                company_handle: "badCompany".into(),
            })
            .await;
        assert!(missing.is_err());

        let job = JobMutator::new(&mut tx)
            .create(CreateJobInput {
                title: "new".into(),
                salary: Some(20),
                equity: Some(Decimal::ZERO),
                company_handle: "c1".into(),
            })
            .await?;
        let fetched = JobSelector::new(&mut tx).get_by_id(job.id).await?;
        assert_eq!(fetched.as_ref().map(|j| j.title.as_str()), Some("new"));

        let updated = JobMutator::new(&mut tx)
            .update(
                job.id,
                PatchJobInput {
                    title: Some("New".into()),
                    salary: Some(999),
                    equity: None,
                },
            )
            .await?;
        assert_eq!(updated.and_then(|j| j.salary), Some(999));
        assert!(
            JobMutator::new(&mut tx)
                .update(
                    job.id + 1000,
                    PatchJobInput {
                        title: Some("New".into()),
                        salary: None,
                        equity: None,
                    },
                )
                .await?
                .is_none()
        );

        assert!(JobMutator::new(&mut tx).delete(job.id).await?);
        assert!(JobSelector::new(&mut tx).get_by_id(job.id).await?.is_none());
        assert!(!JobMutator::new(&mut tx).delete(job.id).await?);

        tx.rollback().await?;
        Ok(())
    }
}
