//! Postgres-backed [`TodoStore`].
//!
//! Owns the connection pool and the `todos` DDL. The partial UPDATE is
//! built dynamically so only the supplied fields are written.

use crate::domain::todo::{NewTodo, Todo, TodoPatch};
use crate::infra::config;
use crate::storage::TodoStore;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, QueryBuilder, Row};

pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    /// Connects using `DATABASE_URL` and ensures the `todos` table exists.
    pub async fn new() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let database_url = config::database_url();

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await?;

        Self::with_pool(pool).await
    }

    /// Builds a store over an existing pool.
    pub async fn with_pool(pool: PgPool) -> anyhow::Result<Self> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                done INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn create(&self, todo: &NewTodo) -> anyhow::Result<i64> {
        let row =
            sqlx::query("INSERT INTO todos (title, description) VALUES ($1, $2) RETURNING id")
                .bind(&todo.title)
                .bind(&todo.description)
                .fetch_one(&self.pool)
                .await?;

        Ok(row.try_get("id")?)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Todo>> {
        let todos =
            sqlx::query_as::<_, Todo>("SELECT id, title, description, done FROM todos ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(todos)
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, done FROM todos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todo)
    }

    async fn exists(&self, id: i64) -> anyhow::Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn update(&self, id: i64, patch: &TodoPatch) -> anyhow::Result<()> {
        if patch.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::new("UPDATE todos SET ");
        {
            let mut assignments = builder.separated(", ");
            if let Some(title) = &patch.title {
                assignments.push("title = ").push_bind_unseparated(title);
            }
            if let Some(description) = &patch.description {
                assignments
                    .push("description = ")
                    .push_bind_unseparated(description);
            }
            if let Some(done) = patch.done {
                assignments.push("done = ").push_bind_unseparated(done);
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id);

        builder.build().execute(&self.pool).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
