//! Data access for the service.
//!
//! Each function takes a connection and performs either a structured statement
//! built with the diesel DSL or a parameterized text query through
//! [`diesel::sql_query`]. Handlers never touch the query builder directly.

pub mod debug;
pub mod items;
pub mod users;
