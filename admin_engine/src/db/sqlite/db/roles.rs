use sqlx::SqliteConnection;

use crate::{db_types::RoleRecord, traits::AdminApiError};

pub async fn count_roles(conn: &mut SqliteConnection) -> Result<i64, AdminApiError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM user_roles").fetch_one(conn).await?;
    Ok(total)
}

pub async fn fetch_roles(limit: i64, offset: i64, conn: &mut SqliteConnection) -> Result<Vec<RoleRecord>, AdminApiError> {
    let roles = sqlx::query_as::<_, RoleRecord>("SELECT id, name FROM user_roles ORDER BY id LIMIT ? OFFSET ?")
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await?;
    Ok(roles)
}

pub async fn create_role(name: &str, conn: &mut SqliteConnection) -> Result<RoleRecord, AdminApiError> {
    let res = sqlx::query("INSERT INTO user_roles (name) VALUES (?)").bind(name).execute(conn).await?;
    Ok(RoleRecord { id: res.last_insert_rowid(), name: name.to_string() })
}

pub async fn fetch_role(id: i64, conn: &mut SqliteConnection) -> Result<Option<RoleRecord>, AdminApiError> {
    let role = sqlx::query_as::<_, RoleRecord>("SELECT id, name FROM user_roles WHERE id = ?")
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(role)
}

pub async fn update_role(id: i64, name: &str, conn: &mut SqliteConnection) -> Result<u64, AdminApiError> {
    let res = sqlx::query("UPDATE user_roles SET name = ? WHERE id = ?").bind(name).bind(id).execute(conn).await?;
    Ok(res.rows_affected())
}

pub async fn delete_role(id: i64, conn: &mut SqliteConnection) -> Result<u64, AdminApiError> {
    let res = sqlx::query("DELETE FROM user_roles WHERE id = ?").bind(id).execute(conn).await?;
    Ok(res.rows_affected())
}
