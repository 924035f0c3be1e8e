use crate::api::user_management::models::{NewUserItem, User, UserIn, UserItemRow};
use crate::schema::{user_items, users};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::Integer;

pub fn create(conn: &mut PgConnection, user: &UserIn) -> QueryResult<User> {
    conn.transaction(|c| {
        diesel::insert_into(users::table)
            .values(user.as_new())
            .returning(User::as_returning())
            .get_result(c)
    })
}

pub fn find(conn: &mut PgConnection, user_id: i32) -> QueryResult<Option<User>> {
    users::table
        .find(user_id)
        .select(User::as_select())
        .first(conn)
        .optional()
}

/// Links an item to a user. Linking an already linked pair is a no-op.
pub fn link_item(conn: &mut PgConnection, user_id: i32, item_id: i32) -> QueryResult<usize> {
    diesel::insert_into(user_items::table)
        .values(NewUserItem { user_id, item_id })
        .on_conflict_do_nothing()
        .execute(conn)
}

/// Returns the number of removed links, zero if the pair wasn't linked.
pub fn unlink_item(conn: &mut PgConnection, user_id: i32, item_id: i32) -> QueryResult<usize> {
    diesel::delete(
        user_items::table
            .filter(user_items::user_id.eq(user_id))
            .filter(user_items::item_id.eq(item_id)),
    )
    .execute(conn)
}

pub fn items_of(conn: &mut PgConnection, user_id: i32) -> QueryResult<Vec<UserItemRow>> {
    diesel::sql_query(
        r#"
        SELECT i.id, i.name, i.description, i.created_at,
               COUNT(*) OVER () AS total_count,
               ROW_NUMBER() OVER (ORDER BY i.created_at DESC, i.id DESC) AS row_num
        FROM items i
        JOIN user_items ui ON ui.item_id = i.id
        WHERE ui.user_id = $1
        ORDER BY i.created_at DESC, i.id DESC
        "#,
    )
    .bind::<Integer, _>(user_id)
    .load(conn)
}
