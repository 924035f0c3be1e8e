use crate::schema::items;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Float, Integer, Nullable, Text, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Queryable, QueryableByName, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = items)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = items)]
pub struct NewItem<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ItemIn {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ItemIn {
    pub fn as_new(&self) -> NewItem<'_> {
        NewItem {
            name: &self.name,
            description: self.description.as_deref(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemOut {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<Item> for ItemOut {
    fn from(item: Item) -> Self {
        ItemOut {
            id: item.id,
            name: item.name,
            description: item.description,
            created_at: item.created_at,
        }
    }
}

#[derive(QueryableByName, Serialize, Deserialize, Debug)]
pub struct SearchHit {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub description: Option<String>,
    #[diesel(sql_type = Timestamp)]
    pub created_at: NaiveDateTime,
    #[diesel(sql_type = Float)]
    #[serde(rename = "relevance_score")]
    pub rank: f32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SearchOut {
    pub query: String,
    pub results: Vec<SearchHit>,
}

/// One row of the analytics query: the totals repeated on every monthly row.
/// An empty table yields a single row with no month.
#[derive(QueryableByName, Debug, Clone)]
pub struct SummaryRow {
    #[diesel(sql_type = BigInt)]
    pub total_items: i64,
    #[diesel(sql_type = Nullable<Timestamp>)]
    pub first_item_date: Option<NaiveDateTime>,
    #[diesel(sql_type = Nullable<Timestamp>)]
    pub last_item_date: Option<NaiveDateTime>,
    #[diesel(sql_type = Nullable<Timestamp>)]
    pub month: Option<NaiveDateTime>,
    #[diesel(sql_type = Nullable<BigInt>)]
    pub items_created: Option<i64>,
    #[diesel(sql_type = Nullable<Double>)]
    pub avg_name_length: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthlyStats {
    pub month: NaiveDateTime,
    pub items_created: i64,
    pub avg_name_length: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemsSummary {
    pub total_items: i64,
    pub first_item_date: Option<NaiveDateTime>,
    pub last_item_date: Option<NaiveDateTime>,
    pub monthly_breakdown: Vec<MonthlyStats>,
}

impl ItemsSummary {
    pub fn from_rows(rows: Vec<SummaryRow>) -> ItemsSummary {
        let (total_items, first_item_date, last_item_date) = rows
            .first()
            .map(|row| (row.total_items, row.first_item_date, row.last_item_date))
            .unwrap_or((0, None, None));

        let monthly_breakdown = rows
            .into_iter()
            .filter_map(|row| {
                Some(MonthlyStats {
                    month: row.month?,
                    items_created: row.items_created.unwrap_or(0),
                    avg_name_length: row.avg_name_length.unwrap_or(0.0),
                })
            })
            .collect();

        ItemsSummary {
            total_items,
            first_item_date,
            last_item_date,
            monthly_breakdown,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BulkCreateOut {
    pub message: String,
    pub items: Vec<ItemOut>,
}
