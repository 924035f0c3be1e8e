pub mod create;
pub mod get_user;
pub mod link;
pub mod models;
pub mod user_items;
