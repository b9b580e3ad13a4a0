use sqlx::SqliteConnection;

use crate::{
    db_types::{NewProduct, Product, ProductSummary},
    traits::AdminApiError,
};

pub async fn count_products(conn: &mut SqliteConnection) -> Result<i64, AdminApiError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products").fetch_one(conn).await?;
    Ok(total)
}

pub async fn fetch_products(
    limit: i64,
    offset: i64,
    conn: &mut SqliteConnection,
) -> Result<Vec<ProductSummary>, AdminApiError> {
    let products = sqlx::query_as::<_, ProductSummary>(
        "SELECT id, name, referral_link, is_active FROM products ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(conn)
    .await?;
    Ok(products)
}

pub async fn create_product(product: &NewProduct, conn: &mut SqliteConnection) -> Result<Product, AdminApiError> {
    let res = sqlx::query("INSERT INTO products (name, referral_link, is_active) VALUES (?, ?, ?)")
        .bind(&product.name)
        .bind(&product.referral_link)
        .bind(product.is_active)
        .execute(&mut *conn)
        .await?;
    let id = res.last_insert_rowid();
    // Re-read so the response carries the database-assigned timestamps.
    fetch_product(id, conn)
        .await?
        .ok_or_else(|| AdminApiError::DatabaseError(format!("Product {id} missing immediately after insert")))
}

pub async fn fetch_product(id: i64, conn: &mut SqliteConnection) -> Result<Option<Product>, AdminApiError> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, referral_link, is_active, created_at, updated_at FROM products WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(product)
}

pub async fn update_product(id: i64, product: &NewProduct, conn: &mut SqliteConnection) -> Result<u64, AdminApiError> {
    let res = sqlx::query(
        "UPDATE products SET name = ?, referral_link = ?, is_active = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
    )
    .bind(&product.name)
    .bind(&product.referral_link)
    .bind(product.is_active)
    .bind(id)
    .execute(conn)
    .await?;
    Ok(res.rows_affected())
}

pub async fn delete_product(id: i64, conn: &mut SqliteConnection) -> Result<u64, AdminApiError> {
    let res = sqlx::query("DELETE FROM products WHERE id = ?").bind(id).execute(conn).await?;
    Ok(res.rows_affected())
}
