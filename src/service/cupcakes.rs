//! CRUD execution against SQLite. Single-statement operations; each
//! `INSERT`/`UPDATE`/`DELETE` returns the affected row via `RETURNING`.

use crate::error::ApiError;
use crate::model::{Cupcake, CupcakePatch, NewCupcake};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const COLUMNS: &str = "id, flavor, size, rating, image";

pub struct CupcakeService;

impl CupcakeService {
    /// List rows whose flavor contains `flavor` case-insensitively, ordered
    /// by id. The empty string matches every row, so an absent query
    /// parameter and `?flavor=` behave identically.
    pub async fn list(pool: &SqlitePool, flavor: &str) -> Result<Vec<Cupcake>, ApiError> {
        let sql = format!(
            "SELECT {} FROM cupcakes WHERE lower(flavor) LIKE '%' || lower(?) || '%' ORDER BY id",
            COLUMNS
        );
        tracing::debug!(sql = %sql, flavor = %flavor, "query");
        let rows = sqlx::query_as::<_, Cupcake>(&sql)
            .bind(flavor)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Fetch one row by primary key.
    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Cupcake>, ApiError> {
        let sql = format!("SELECT {} FROM cupcakes WHERE id = ?", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Cupcake>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert one row; the database assigns the id. Returns the created row.
    pub async fn create(pool: &SqlitePool, new: &NewCupcake) -> Result<Cupcake, ApiError> {
        let sql = format!(
            "INSERT INTO cupcakes (flavor, size, rating, image) VALUES (?, ?, ?, ?) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, flavor = %new.flavor, "query");
        let row = sqlx::query_as::<_, Cupcake>(&sql)
            .bind(&new.flavor)
            .bind(&new.size)
            .bind(new.rating)
            .bind(&new.image)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Apply the fields present in `patch` to the row with `id`, leaving the
    /// rest untouched. Returns the merged row, or None when the id does not
    /// exist. An all-absent patch reads back the current row.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: &CupcakePatch,
    ) -> Result<Option<Cupcake>, ApiError> {
        if patch.is_empty() {
            return Self::get(pool, id).await;
        }
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE cupcakes SET ");
        {
            let mut sets = qb.separated(", ");
            if let Some(flavor) = &patch.flavor {
                sets.push("flavor = ").push_bind_unseparated(flavor.as_str());
            }
            if let Some(size) = &patch.size {
                sets.push("size = ").push_bind_unseparated(size.as_str());
            }
            if let Some(rating) = patch.rating {
                sets.push("rating = ").push_bind_unseparated(rating);
            }
            if let Some(image) = &patch.image {
                sets.push("image = ").push_bind_unseparated(image.as_str());
            }
        }
        qb.push(" WHERE id = ").push_bind(id);
        qb.push(" RETURNING ").push(COLUMNS);
        tracing::debug!(id, "update cupcake");
        let row = qb
            .build_query_as::<Cupcake>()
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Delete one row by id. Returns the deleted row, or None when the id
    /// does not exist.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Cupcake>, ApiError> {
        let sql = format!("DELETE FROM cupcakes WHERE id = ? RETURNING {}", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Cupcake>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}
