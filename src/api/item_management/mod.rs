pub mod analytics;
pub mod bulk_create;
pub mod create;
pub mod get_item;
pub mod list;
pub mod models;
pub mod search;
