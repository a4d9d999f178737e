//! Database connection, state assembly, and DbErr translation.

pub mod db;
pub mod db_errors;
pub mod state;
