use admin_engine::paging::{PagedResult, PageParams};
use serde::{Deserialize, Serialize};
use serde_json::Value;

//--------------------------------------     Envelopes       ---------------------------------------------------------

/// The uniform response wrapper for non-paginated outcomes. `data` is omitted entirely when there
/// is no payload, which clients rely on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse<T = Value> {
    pub status: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub status_code: u16,
}

impl<T> JsonResponse<T> {
    pub fn ok<S: ToString>(message: S, data: T) -> Self {
        Self { status: true, message: message.to_string(), data: Some(data), status_code: 200 }
    }

    pub fn created<S: ToString>(message: S, data: T) -> Self {
        Self { status: true, message: message.to_string(), data: Some(data), status_code: 201 }
    }
}

impl JsonResponse<Value> {
    pub fn accepted<S: ToString>(message: S) -> Self {
        Self { status: true, message: message.to_string(), data: None, status_code: 202 }
    }

    pub fn failure<S: ToString>(message: S, status_code: u16) -> Self {
        Self { status: false, message: message.to_string(), data: None, status_code }
    }
}

/// The envelope for successful listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub status: bool,
    pub message: String,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
    pub data: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn data_found(result: PagedResult<T>) -> Self {
        Self {
            status: true,
            message: "Data found".to_string(),
            page: result.page,
            per_page: result.per_page,
            total: result.total,
            total_pages: result.total_pages,
            data: result.rows,
        }
    }
}

//--------------------------------------     Query/body payloads       -----------------------------------------------

/// Raw paging input as it arrives on the query string. Values are kept as strings so that
/// normalization (and its silent fallback) happens in one place, [`PageParams::from_raw`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

impl PageQuery {
    pub fn page_params(&self) -> PageParams {
        PageParams::from_raw(self.page.as_deref(), self.page_size.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    pub token: String,
    #[serde(rename = "userEmail")]
    pub user_email: String,
    /// The expiry date of the issued token, formatted `YYYY-MM-DD`.
    #[serde(rename = "expireDate")]
    pub expire_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePayload {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDeleteRequest {
    pub user_ids: Vec<i64>,
}
