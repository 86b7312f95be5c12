//! Infrastructure layer - database, store construction, and error translation.

pub mod db;
pub mod db_errors;
pub mod state;
