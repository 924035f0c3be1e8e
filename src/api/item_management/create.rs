use crate::api::item_management::models::{ItemIn, ItemOut};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::store;
use rocket::serde::json::Json;

#[post("/items", data = "<item>")]
pub(crate) async fn create_item(
    item: Json<ItemIn>,
    conn: DbConn,
) -> Result<Json<ItemOut>, ErrorResponse> {
    let item = item.into_inner();

    let created = conn
        .run(move |c| store::items::create(c, &item))
        .await
        .map_err(ErrorResponse::from_query)?;

    log::info!("created item {}", created.id);

    Ok(Json(created.into()))
}
