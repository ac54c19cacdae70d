//! ProductRepository - Repository per la gestione dei prodotti

use super::{Create, Delete, Read, Update};
use crate::dtos::{CreateProductDTO, UpdateProductDTO};
use crate::entities::Product;
use chrono::Utc;
use sqlx::{Error, SqlitePool};

pub struct ProductRepository {
    connection_pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(connection_pool: SqlitePool) -> ProductRepository {
        Self { connection_pool }
    }

    /// Lista tutti i prodotti, opzionalmente filtrati per categoria esatta
    pub async fn find_all(&self, category: Option<&str>) -> Result<Vec<Product>, Error> {
        match category {
            Some(category) => {
                sqlx::query_as::<_, Product>(
                    "SELECT id, name, price, category, created_at, updated_at \
                     FROM products WHERE category = ? ORDER BY id",
                )
                .bind(category)
                .fetch_all(&self.connection_pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Product>(
                    "SELECT id, name, price, category, created_at, updated_at \
                     FROM products ORDER BY id",
                )
                .fetch_all(&self.connection_pool)
                .await
            }
        }
    }
}

impl Create<Product, CreateProductDTO> for ProductRepository {
    async fn create(&self, data: &CreateProductDTO) -> Result<Product, Error> {
        let now = Utc::now();
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price, category, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING id, name, price, category, created_at, updated_at",
        )
        .bind(&data.name)
        .bind(data.price)
        .bind(&data.category)
        .bind(now)
        .bind(now)
        .fetch_one(&self.connection_pool)
        .await
    }
}

impl Read<Product, i64> for ProductRepository {
    async fn read(&self, id: &i64) -> Result<Option<Product>, Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price, category, created_at, updated_at FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}

impl Update<Product, UpdateProductDTO, i64> for ProductRepository {
    async fn update(&self, id: &i64, data: &UpdateProductDTO) -> Result<Product, Error> {
        // COALESCE lascia invariati i campi non forniti
        sqlx::query_as::<_, Product>(
            "UPDATE products SET \
                name = COALESCE(?, name), \
                price = COALESCE(?, price), \
                category = COALESCE(?, category), \
                updated_at = ? \
             WHERE id = ? \
             RETURNING id, name, price, category, created_at, updated_at",
        )
        .bind(data.name.as_deref())
        .bind(data.price)
        .bind(data.category.as_deref())
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?
        .ok_or(Error::RowNotFound)
    }
}

impl Delete<i64> for ProductRepository {
    async fn delete(&self, id: &i64) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected())
    }
}
