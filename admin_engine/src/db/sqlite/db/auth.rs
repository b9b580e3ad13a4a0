use sqlx::SqliteConnection;

use crate::{db_types::AdminUser, traits::AuthApiError};

/// Fetches the principal record for a login attempt. The role label is resolved with a LEFT JOIN
/// so that users without an assigned role come back with `role = None` rather than being
/// filtered out.
pub async fn fetch_admin_user(email: &str, conn: &mut SqliteConnection) -> Result<Option<AdminUser>, AuthApiError> {
    let user = sqlx::query_as::<_, AdminUser>(
        r#"SELECT users.id, users.username, user_roles.name AS role, users.email, users.password
           FROM users LEFT JOIN user_roles ON user_roles.id = users.role_id
           WHERE users.email = ?"#,
    )
    .bind(email)
    .fetch_optional(conn)
    .await?;
    Ok(user)
}
