use crate::api::item_management::models::ItemOut;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::store;
use rocket::serde::json::Json;

pub const DEFAULT_LIMIT: u32 = 10;

/// Pagination query. Missing fields take their defaults; values that are not
/// non-negative integers fail the guard.
#[derive(FromForm, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    #[field(default = 0)]
    pub skip: u32,
    #[field(default = DEFAULT_LIMIT)]
    pub limit: u32,
}

#[get("/items?<page..>")]
pub(crate) async fn list_items(
    page: Page,
    conn: DbConn,
) -> Result<Json<Vec<ItemOut>>, ErrorResponse> {
    let skip = i64::from(page.skip);
    let limit = i64::from(page.limit);

    let item_list = conn
        .run(move |c| store::items::list(c, skip, limit))
        .await
        .map_err(ErrorResponse::from_query)?;

    Ok(Json(item_list.into_iter().map(ItemOut::from).collect()))
}
