use crate::api::item_management::models::Item;
use crate::api::user_management::models::LinkOut;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::store;
use diesel::QueryResult;
use rocket::http::Status;
use rocket::serde::json::Json;

#[post("/users/<user_id>/items/<item_id>")]
pub(crate) async fn link_item(
    user_id: i32,
    item_id: i32,
    conn: DbConn,
) -> Result<Json<LinkOut>, ErrorResponse> {
    let item = conn
        .run(move |c| -> QueryResult<Result<Item, ErrorResponse>> {
            let user = store::users::find(c, user_id)?;
            let item = store::items::find(c, item_id)?;
            match (user, item) {
                (Some(_), Some(item)) => {
                    store::users::link_item(c, user_id, item_id)?;
                    Ok(Ok(item))
                }
                (None, _) => Ok(Err(ErrorResponse::not_found("User not found"))),
                (_, None) => Ok(Err(ErrorResponse::not_found("Item not found"))),
            }
        })
        .await
        .map_err(ErrorResponse::from_query)??;

    Ok(Json(LinkOut {
        user_id,
        item: item.into(),
    }))
}

#[delete("/users/<user_id>/items/<item_id>")]
pub(crate) async fn unlink_item(
    user_id: i32,
    item_id: i32,
    conn: DbConn,
) -> Result<Status, ErrorResponse> {
    let removed = conn
        .run(move |c| store::users::unlink_item(c, user_id, item_id))
        .await
        .map_err(ErrorResponse::from_query)?;

    if removed == 0 {
        return Err(ErrorResponse::not_found("Link not found"));
    }

    Ok(Status::NoContent)
}
