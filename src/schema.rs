diesel::table! {
    items (id) {
        id -> Int4,
        name -> Varchar,
        description -> Nullable<Varchar>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    users (id) {
        id -> Int4,
        username -> Varchar,
        email -> Varchar,
        created_at -> Timestamp,
    }
}

diesel::table! {
    user_items (user_id, item_id) {
        user_id -> Int4,
        item_id -> Int4,
        created_at -> Timestamp,
    }
}

diesel::joinable!(user_items -> items (item_id));
diesel::joinable!(user_items -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    items,
    users,
    user_items,
);
