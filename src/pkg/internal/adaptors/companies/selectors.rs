use sqlx::PgConnection;

use crate::prelude::Result;

pub struct CompanySelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> CompanySelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        CompanySelector { pool }
    }

    pub async fn exists(&mut self, handle: &str) -> Result<bool> {
        let row = sqlx::query("SELECT handle FROM companies WHERE handle = $1")
            .bind(handle)
            .fetch_optional(&mut *self.pool)
            .await?;
        Ok(row.is_some())
    }
}
