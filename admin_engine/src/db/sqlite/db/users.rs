use adm_common::hashing::sha256_hex;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::{
    db_types::{NewUser, User, UserSummary},
    traits::AdminApiError,
};

const USER_COLUMNS: &str = "id, username, role_id, api_key, client_id, country_code, email, validation_token, \
                            mobile, referral_code, product_id, total_invitees, successful_referral, is_active";

pub async fn count_users(conn: &mut SqliteConnection) -> Result<i64, AdminApiError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users").fetch_one(conn).await?;
    Ok(total)
}

pub async fn fetch_users(limit: i64, offset: i64, conn: &mut SqliteConnection) -> Result<Vec<UserSummary>, AdminApiError> {
    let users = sqlx::query_as::<_, UserSummary>(
        "SELECT id, username, email, mobile FROM users ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(conn)
    .await?;
    Ok(users)
}

pub async fn create_user(user: &NewUser, conn: &mut SqliteConnection) -> Result<User, AdminApiError> {
    let res = sqlx::query(
        "INSERT INTO users (username, role_id, api_key, client_id, country_code, email, password, \
         validation_token, mobile, referral_code, product_id, total_invitees, successful_referral, is_active) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&user.username)
    .bind(user.normalized_role_id())
    .bind(&user.api_key)
    .bind(&user.client_id)
    .bind(user.normalized_country_code())
    .bind(&user.email)
    .bind(sha256_hex(&user.password))
    .bind(&user.validation_token)
    .bind(&user.mobile)
    .bind(&user.referral_code)
    .bind(user.product_id)
    .bind(user.total_invitees)
    .bind(user.successful_referral)
    .bind(user.is_active)
    .execute(&mut *conn)
    .await?;
    let id = res.last_insert_rowid();
    fetch_user(id, conn)
        .await?
        .ok_or_else(|| AdminApiError::DatabaseError(format!("User {id} missing immediately after insert")))
}

pub async fn fetch_user(id: i64, conn: &mut SqliteConnection) -> Result<Option<User>, AdminApiError> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");
    let user = sqlx::query_as::<_, User>(&query).bind(id).fetch_optional(conn).await?;
    Ok(user)
}

pub async fn update_user(id: i64, user: &NewUser, conn: &mut SqliteConnection) -> Result<u64, AdminApiError> {
    let res = sqlx::query(
        "UPDATE users SET username = ?, role_id = ?, api_key = ?, client_id = ?, country_code = ?, email = ?, \
         password = ?, validation_token = ?, mobile = ?, referral_code = ?, product_id = ?, total_invitees = ?, \
         successful_referral = ?, is_active = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
    )
    .bind(&user.username)
    .bind(user.normalized_role_id())
    .bind(&user.api_key)
    .bind(&user.client_id)
    .bind(user.normalized_country_code())
    .bind(&user.email)
    .bind(sha256_hex(&user.password))
    .bind(&user.validation_token)
    .bind(&user.mobile)
    .bind(&user.referral_code)
    .bind(user.product_id)
    .bind(user.total_invitees)
    .bind(user.successful_referral)
    .bind(user.is_active)
    .bind(id)
    .execute(conn)
    .await?;
    Ok(res.rows_affected())
}

pub async fn delete_user(id: i64, conn: &mut SqliteConnection) -> Result<u64, AdminApiError> {
    let res = sqlx::query("DELETE FROM users WHERE id = ?").bind(id).execute(conn).await?;
    Ok(res.rows_affected())
}

pub async fn delete_users(ids: &[i64], conn: &mut SqliteConnection) -> Result<u64, AdminApiError> {
    if ids.is_empty() {
        return Ok(0);
    }
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("DELETE FROM users WHERE id IN (");
    let mut values = qb.separated(", ");
    for id in ids {
        values.push_bind(*id);
    }
    qb.push(")");
    let res = qb.build().execute(conn).await?;
    Ok(res.rows_affected())
}
