use crate::api::user_management::models::UserOut;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::store;
use rocket::serde::json::Json;

#[get("/users/<user_id>")]
pub(crate) async fn get_user(user_id: i32, conn: DbConn) -> Result<Json<UserOut>, ErrorResponse> {
    let user = conn
        .run(move |c| store::users::find(c, user_id))
        .await
        .map_err(ErrorResponse::from_query)?
        .ok_or_else(|| ErrorResponse::not_found("User not found"))?;

    Ok(Json(user.into()))
}
