use sqlx::PgConnection;

use crate::{
    pkg::internal::{
        adaptors::jobs::spec::{JobEntry, JobFilter},
        sql::SqlParam,
    },
    prelude::Result,
};

pub struct JobSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, salary, equity, company_handle FROM jobs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, salary, equity, company_handle FROM jobs ORDER BY id",
        )
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn filter(&mut self, filter: &JobFilter) -> Result<Vec<JobEntry>> {
        let Some(fragment) = filter.where_fragment() else {
            return self.get_all().await;
        };
        let query = format!(
            "SELECT id, title, salary, equity, company_handle FROM jobs WHERE {} ORDER BY id",
            fragment.conditions
        );
        let mut q = sqlx::query_as::<_, JobEntry>(&query);
        for value in &fragment.values {
            q = match value {
                SqlParam::Text(v) => q.bind(v),
                SqlParam::Int(v) => q.bind(v),
                SqlParam::Numeric(v) => q.bind(v),
            };
        }
        let rows = q.fetch_all(&mut *self.pool).await?;

        Ok(rows)
    }
}
