use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::Json;

#[derive(QueryableByName)]
struct JsonRows {
    #[diesel(sql_type = Json)]
    rows: serde_json::Value,
}

/// Whether the text starts with the `select` keyword, ignoring case and leading
/// whitespace.
pub fn is_select(query: &str) -> bool {
    query
        .trim_start()
        .get(..6)
        .map(|head| head.eq_ignore_ascii_case("select"))
        .unwrap_or(false)
}

/// Wraps an arbitrary SELECT so that its rows come back as one JSON array.
pub fn wrap_as_json(query: &str) -> String {
    let inner = query.trim().trim_end_matches(';').trim_end();
    format!(
        "SELECT COALESCE(json_agg(row_to_json(q)), '[]'::json) AS rows FROM ({}) AS q",
        inner
    )
}

/// Executes the text unbound inside a read-only transaction.
pub fn run_select(conn: &mut PgConnection, query: &str) -> QueryResult<serde_json::Value> {
    let wrapped = wrap_as_json(query);
    conn.build_transaction()
        .read_only()
        .run::<_, diesel::result::Error, _>(|c| {
            diesel::sql_query(wrapped).get_result::<JsonRows>(c)
        })
        .map(|result| result.rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_keyword_is_case_insensitive() {
        assert!(is_select("select 1"));
        assert!(is_select("  SeLeCt * from items"));
        assert!(is_select("SELECT"));
    }

    #[test]
    fn other_statements_are_not_selects() {
        assert!(!is_select("delete from items"));
        assert!(!is_select("with x as (select 1) select * from x"));
        assert!(!is_select("sel"));
        assert!(!is_select(""));
        assert!(!is_select("ünïcode"));
    }

    #[test]
    fn wrapping_strips_trailing_semicolons() {
        assert_eq!(
            wrap_as_json(" select id from items; "),
            "SELECT COALESCE(json_agg(row_to_json(q)), '[]'::json) AS rows FROM (select id from items) AS q"
        );
    }
}
