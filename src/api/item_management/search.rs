use crate::api::item_management::models::SearchOut;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::store;
use rocket::serde::json::Json;

#[get("/items/search/<query>")]
pub(crate) async fn search_items(
    query: String,
    conn: DbConn,
) -> Result<Json<SearchOut>, ErrorResponse> {
    let term = query.clone();
    let results = conn
        .run(move |c| store::items::search(c, &term))
        .await
        .map_err(ErrorResponse::from_query)?;

    Ok(Json(SearchOut { query, results }))
}
