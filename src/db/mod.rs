use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::env;

use crate::models::assistant::{Assistant, AssistantFields};

/// One process-wide handle, capped at a single connection. Failure to
/// connect at startup is fatal: no request can be served without it.
pub async fn create_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to the database")
}

/// Storage seam for the gateway. Each method issues exactly one
/// parameterized statement; write methods report the affected-row count
/// so callers can distinguish "not found" from success.
#[async_trait]
pub trait AssistantStore: Send + Sync {
    async fn insert(&self, fields: &AssistantFields) -> Result<i32, sqlx::Error>;
    async fn fetch(&self, id: i32) -> Result<Option<Assistant>, sqlx::Error>;
    async fn update(&self, id: i32, fields: &AssistantFields) -> Result<u64, sqlx::Error>;
    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error>;
}

pub struct PgAssistantStore {
    pool: PgPool,
}

impl PgAssistantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssistantStore for PgAssistantStore {
    async fn insert(&self, fields: &AssistantFields) -> Result<i32, sqlx::Error> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO assistants (name, mobile, email, salary, city, country, department, role) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id",
        )
        .bind(fields.name.as_deref())
        .bind(fields.mobile.as_deref())
        .bind(fields.email.as_deref())
        .bind(fields.salary)
        .bind(fields.city.as_deref())
        .bind(fields.country.as_deref())
        .bind(fields.department.as_deref())
        .bind(fields.role.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn fetch(&self, id: i32) -> Result<Option<Assistant>, sqlx::Error> {
        sqlx::query_as::<_, Assistant>(
            "SELECT id, name, mobile, email, salary, city, country, department, role \
             FROM assistants WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update(&self, id: i32, fields: &AssistantFields) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE assistants SET name = $1, mobile = $2, email = $3, salary = $4, \
             city = $5, country = $6, department = $7, role = $8 WHERE id = $9",
        )
        .bind(fields.name.as_deref())
        .bind(fields.mobile.as_deref())
        .bind(fields.email.as_deref())
        .bind(fields.salary)
        .bind(fields.city.as_deref())
        .bind(fields.country.as_deref())
        .bind(fields.department.as_deref())
        .bind(fields.role.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assistants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
