use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

//--------------------------------------     AdminUser       ---------------------------------------------------------

/// The principal record used for login. The role label comes from a LEFT JOIN against the
/// `user_roles` table, so it is `None` for users with no elevated role.
///
/// `password` holds the stored digest, never the plaintext. The struct deliberately does not
/// implement `Serialize` so the digest cannot leak into a response body.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    pub role: Option<String>,
    pub email: String,
    pub password: String,
}

//--------------------------------------     Country       -----------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Country {
    pub code: i64,
    pub name: String,
    pub continent_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCountry {
    pub name: String,
    pub continent_name: String,
}

//--------------------------------------     Product       -----------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub referral_link: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The projection returned by product listings. The timestamps are only included when fetching a
/// single product.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub referral_link: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub referral_link: String,
    pub is_active: bool,
}

//--------------------------------------     RoleRecord       --------------------------------------------------------

/// A row in the `user_roles` table. Only the role named `admin` grants access to the gateway
/// itself; the rest exist for the managed application.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: i64,
    pub name: String,
}

//--------------------------------------     User       --------------------------------------------------------------

/// The full user detail view. Password and timestamps are excluded on purpose.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub role_id: Option<i64>,
    pub api_key: Option<String>,
    pub client_id: Option<String>,
    pub country_code: Option<i64>,
    pub email: Option<String>,
    pub validation_token: Option<String>,
    pub mobile: Option<String>,
    pub referral_code: Option<String>,
    pub product_id: Option<i64>,
    pub total_invitees: i64,
    pub successful_referral: i64,
    pub is_active: i64,
}

/// The projection returned by user listings.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
}

/// Create/update payload for a user. `password` is the plaintext; the backend digests it before
/// it touches the database. A `role_id` or `country_code` of zero is normalized to NULL, matching
/// the behaviour clients already rely on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub role_id: Option<i64>,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub client_id: String,
    pub country_code: Option<i64>,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub validation_token: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub referral_code: String,
    #[serde(default)]
    pub product_id: i64,
    #[serde(default)]
    pub total_invitees: i64,
    #[serde(default)]
    pub successful_referral: i64,
    #[serde(default)]
    pub is_active: i64,
}

impl NewUser {
    /// `role_id = 0` and `country_code = 0` both mean "not set".
    pub fn normalized_role_id(&self) -> Option<i64> {
        self.role_id.filter(|id| *id != 0)
    }

    pub fn normalized_country_code(&self) -> Option<i64> {
        self.country_code.filter(|code| *code != 0)
    }
}
