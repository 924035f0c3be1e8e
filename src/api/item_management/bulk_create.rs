use crate::api::item_management::models::{BulkCreateOut, ItemIn, ItemOut};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::store;
use rocket::serde::json::Json;

pub const MAX_BULK_ITEMS: usize = 1000;

pub(crate) fn check_batch_len(len: usize) -> Result<(), ErrorResponse> {
    if len == 0 || len > MAX_BULK_ITEMS {
        return Err(ErrorResponse::invalid_input(format!(
            "Invalid item count (max {})",
            MAX_BULK_ITEMS
        )));
    }
    Ok(())
}

#[post("/items/bulk-create", data = "<batch>")]
pub(crate) async fn bulk_create_items(
    batch: Json<Vec<ItemIn>>,
    conn: DbConn,
) -> Result<Json<BulkCreateOut>, ErrorResponse> {
    let batch = batch.into_inner();
    check_batch_len(batch.len())?;

    let created = conn
        .run(move |c| store::items::bulk_create(c, &batch))
        .await
        .map_err(|err| {
            log::error!("bulk insert rolled back: {}", err);
            ErrorResponse::from_query(err)
        })?;

    Ok(Json(BulkCreateOut {
        message: format!("Created {} items", created.len()),
        items: created.into_iter().map(ItemOut::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::Status;

    #[test]
    fn empty_and_oversized_batches_are_rejected() {
        for len in [0, MAX_BULK_ITEMS + 1] {
            let err = check_batch_len(len).unwrap_err();
            assert_eq!(err.status(), Status::BadRequest);
            assert_eq!(err.message(), "Invalid item count (max 1000)");
        }
    }

    #[test]
    fn batches_within_bounds_pass() {
        assert!(check_batch_len(1).is_ok());
        assert!(check_batch_len(3).is_ok());
        assert!(check_batch_len(MAX_BULK_ITEMS).is_ok());
    }
}
