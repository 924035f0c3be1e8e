use rocket::Route;

pub mod debug_query;
pub mod health;
pub mod item_management;
pub mod user_management;

pub fn routes() -> Vec<Route> {
    routes![
        health::health_check,
        item_management::create::create_item,
        item_management::list::list_items,
        item_management::get_item::get_item,
        item_management::search::search_items,
        item_management::analytics::items_summary,
        item_management::bulk_create::bulk_create_items,
        user_management::create::create_user,
        user_management::get_user::get_user,
        user_management::user_items::get_user_items,
        user_management::link::link_item,
        user_management::link::unlink_item,
        debug_query::debug_query,
    ]
}
