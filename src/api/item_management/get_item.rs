use crate::api::item_management::models::ItemOut;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::store;
use rocket::serde::json::Json;

#[get("/items/<item_id>")]
pub(crate) async fn get_item(item_id: i32, conn: DbConn) -> Result<Json<ItemOut>, ErrorResponse> {
    let item = conn
        .run(move |c| store::items::find(c, item_id))
        .await
        .map_err(ErrorResponse::from_query)?
        .ok_or_else(|| ErrorResponse::not_found("Item not found"))?;

    Ok(Json(item.into()))
}
