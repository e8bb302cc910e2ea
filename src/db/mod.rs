// src/db/mod.rs
//! Public façade for DB helpers.

pub mod connection;
pub mod schema;

pub use connection::{
    close_db_connection, compile_options, current_journal_mode, new_db_path, open_db_connection,
    set_journal_mode_sql,
};
pub use schema::populate_dummy_schema;
