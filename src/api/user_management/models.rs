use crate::api::item_management::models::ItemOut;
use crate::schema::{user_items, users};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Nullable, Text, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = user_items)]
pub struct NewUserItem {
    pub user_id: i32,
    pub item_id: i32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UserIn {
    pub username: String,
    pub email: String,
}

impl UserIn {
    pub fn as_new(&self) -> NewUser<'_> {
        NewUser {
            username: &self.username,
            email: &self.email,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserOut {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

impl From<User> for UserOut {
    fn from(user: User) -> Self {
        UserOut {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub email: String,
}

/// An item linked to a user, numbered newest first.
#[derive(QueryableByName, Serialize, Deserialize, Debug)]
pub struct UserItemRow {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub description: Option<String>,
    #[diesel(sql_type = Timestamp)]
    pub created_at: NaiveDateTime,
    #[diesel(sql_type = BigInt)]
    pub total_count: i64,
    #[diesel(sql_type = BigInt)]
    pub row_num: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserItemsOut {
    pub user: UserSummary,
    pub items: Vec<UserItemRow>,
    pub total_count: usize,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LinkOut {
    pub user_id: i32,
    pub item: ItemOut,
}
