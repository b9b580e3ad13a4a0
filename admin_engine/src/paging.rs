//! The paginated listing contract.
//!
//! Every "list" endpoint follows the same protocol, regardless of entity:
//! 1. Normalize the raw `page`/`pageSize` query values ([`PageParams::from_raw`]). Malformed or
//!    non-positive input silently falls back to the defaults; listing never fails on bad paging
//!    input.
//! 2. Run the backend's count query, then fetch one page at `(limit, offset)` in the backend's
//!    stable order. Either failure is fatal to the operation ([`PagedFetchError`] says which leg
//!    failed, because the two legs report different messages at the HTTP boundary).
//! 3. Wrap the page in a [`PagedResult`] with `total_pages = ceil(total / page_size)`.
//!
//! An empty page is a valid `PagedResult`; the HTTP layer turns it into a 404. Note that this
//! conflates "no records at all" with "page beyond the last page" - kept for wire compatibility.

use std::future::Future;

use serde::Serialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

//--------------------------------------     PageParams       --------------------------------------------------------

/// Normalized paging input. Both fields are guaranteed to be >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    page: i64,
    page_size: i64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, page_size: DEFAULT_PAGE_SIZE }
    }
}

impl PageParams {
    /// Builds params from untrusted query input. Any value that does not parse as a positive
    /// integer is replaced by the default (page 1, page size 10). This substitution is silent by
    /// design.
    pub fn from_raw(page: Option<&str>, page_size: Option<&str>) -> Self {
        let page = page.and_then(|v| v.trim().parse::<i64>().ok()).filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
        let page_size = page_size
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|s| *s >= 1)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self { page, page_size }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Saturates instead of overflowing, so absurdly large page numbers land on an empty page
    /// rather than a panic or a negative SQL offset.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

//--------------------------------------     PagedResult       -------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct PagedResult<T> {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
    pub rows: Vec<T>,
}

impl<T> PagedResult<T> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// `ceil(total / page_size)` without going through floats. Saturates on extreme page sizes.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    total.saturating_add(page_size - 1) / page_size
}

//--------------------------------------     paged_fetch       -------------------------------------------------------

/// Distinguishes which leg of a paged fetch failed, so the boundary can report the right message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagedFetchError<E> {
    /// The total-count query failed. Pagination metadata cannot be computed without it.
    Count(E),
    /// The page fetch itself failed.
    Fetch(E),
}

/// Runs the listing contract against an injected count future and fetch function.
///
/// The two injected calls are the only potentially-blocking pieces; their pooling and timeouts are
/// the backend's concern. Neither leg is retried here.
pub async fn paged_fetch<T, E, C, F, Fut>(
    params: PageParams,
    count: C,
    fetch: F,
) -> Result<PagedResult<T>, PagedFetchError<E>>
where
    C: Future<Output = Result<i64, E>>,
    F: FnOnce(i64, i64) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    let total = count.await.map_err(PagedFetchError::Count)?;
    let rows = fetch(params.page_size(), params.offset()).await.map_err(PagedFetchError::Fetch)?;
    Ok(PagedResult {
        page: params.page(),
        per_page: params.page_size(),
        total,
        total_pages: total_pages(total, params.page_size()),
        rows,
    })
}
