use crate::api::item_management::models::{
    Item, ItemIn, ItemsSummary, SearchHit, SummaryRow,
};
use crate::schema::items;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::{Array, Nullable, Text};

const SEARCH_LIMIT: i64 = 20;

pub fn create(conn: &mut PgConnection, item: &ItemIn) -> QueryResult<Item> {
    conn.transaction(|c| {
        diesel::insert_into(items::table)
            .values(item.as_new())
            .returning(Item::as_returning())
            .get_result(c)
    })
}

pub fn list(conn: &mut PgConnection, skip: i64, limit: i64) -> QueryResult<Vec<Item>> {
    items::table
        .order(items::id.asc())
        .offset(skip)
        .limit(limit)
        .select(Item::as_select())
        .load(conn)
}

pub fn find(conn: &mut PgConnection, item_id: i32) -> QueryResult<Option<Item>> {
    items::table
        .find(item_id)
        .select(Item::as_select())
        .first(conn)
        .optional()
}

pub fn search(conn: &mut PgConnection, query: &str) -> QueryResult<Vec<SearchHit>> {
    diesel::sql_query(
        r#"
        SELECT id, name, description, created_at,
               ts_rank(to_tsvector('english', name || ' ' || COALESCE(description, '')),
                       plainto_tsquery('english', $1)) AS rank
        FROM items
        WHERE to_tsvector('english', name || ' ' || COALESCE(description, ''))
              @@ plainto_tsquery('english', $1)
        ORDER BY rank DESC, created_at DESC
        LIMIT $2
        "#,
    )
    .bind::<Text, _>(query)
    .bind::<diesel::sql_types::BigInt, _>(SEARCH_LIMIT)
    .load(conn)
}

pub fn summary(conn: &mut PgConnection) -> QueryResult<ItemsSummary> {
    let rows = diesel::sql_query(
        r#"
        WITH monthly_stats AS (
            SELECT DATE_TRUNC('month', created_at) AS month,
                   COUNT(*) AS items_created,
                   ROUND(AVG(LENGTH(name)), 2)::float8 AS avg_name_length
            FROM items
            GROUP BY DATE_TRUNC('month', created_at)
        ),
        total_stats AS (
            SELECT COUNT(*) AS total_items,
                   MIN(created_at) AS first_item_date,
                   MAX(created_at) AS last_item_date
            FROM items
        )
        SELECT ts.total_items, ts.first_item_date, ts.last_item_date,
               ms.month, ms.items_created, ms.avg_name_length
        FROM total_stats ts
        LEFT JOIN monthly_stats ms ON TRUE
        ORDER BY ms.month DESC NULLS LAST
        "#,
    )
    .load::<SummaryRow>(conn)?;

    Ok(ItemsSummary::from_rows(rows))
}

/// Inserts the whole batch in one statement; either every item is created or none.
pub fn bulk_create(conn: &mut PgConnection, batch: &[ItemIn]) -> QueryResult<Vec<Item>> {
    let names = batch.iter().map(|item| item.name.as_str()).collect::<Vec<_>>();
    let descriptions = batch
        .iter()
        .map(|item| item.description.as_deref())
        .collect::<Vec<_>>();

    let mut created = conn.transaction(|c| {
        diesel::sql_query(
            r#"
            INSERT INTO items (name, description, created_at)
            SELECT t.name, t.description, (now() AT TIME ZONE 'utc')
            FROM unnest($1::text[], $2::text[]) WITH ORDINALITY AS t(name, description, ord)
            ORDER BY t.ord
            RETURNING id, name, description, created_at
            "#,
        )
        .bind::<Array<Text>, _>(names)
        .bind::<Array<Nullable<Text>>, _>(descriptions)
        .load::<Item>(c)
    })?;

    created.sort_by_key(|item| item.id);
    Ok(created)
}
