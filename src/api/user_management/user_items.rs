use crate::api::user_management::models::{UserItemsOut, UserSummary};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::store;
use rocket::serde::json::Json;

#[get("/users/<user_id>/items")]
pub(crate) async fn get_user_items(
    user_id: i32,
    conn: DbConn,
) -> Result<Json<UserItemsOut>, ErrorResponse> {
    let user = conn
        .run(move |c| store::users::find(c, user_id))
        .await
        .map_err(ErrorResponse::from_query)?
        .ok_or_else(|| ErrorResponse::not_found("User not found"))?;

    let items = conn
        .run(move |c| store::users::items_of(c, user_id))
        .await
        .map_err(ErrorResponse::from_query)?;

    Ok(Json(UserItemsOut {
        user: UserSummary {
            id: user.id,
            username: user.username,
            email: user.email,
        },
        total_count: items.len(),
        items,
    }))
}
