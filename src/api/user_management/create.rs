use crate::api::user_management::models::{UserIn, UserOut};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::store;
use rocket::serde::json::Json;

#[post("/users", data = "<user>")]
pub(crate) async fn create_user(
    user: Json<UserIn>,
    conn: DbConn,
) -> Result<Json<UserOut>, ErrorResponse> {
    let user = user.into_inner();

    let created = conn
        .run(move |c| store::users::create(c, &user))
        .await
        .map_err(ErrorResponse::from_query)?;

    log::info!("created user {}", created.id);

    Ok(Json(created.into()))
}
