use crate::api::item_management::models::ItemsSummary;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::store;
use rocket::serde::json::Json;

#[get("/analytics/items-summary")]
pub(crate) async fn items_summary(conn: DbConn) -> Result<Json<ItemsSummary>, ErrorResponse> {
    let summary = conn
        .run(store::items::summary)
        .await
        .map_err(ErrorResponse::from_query)?;

    Ok(Json(summary))
}
