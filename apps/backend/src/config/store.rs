use std::env;
use std::fmt;

use crate::error::AppError;

/// Which store backs game sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    /// In-process map, lost on restart
    #[default]
    Memory,
    /// Postgres via SeaORM
    Postgres,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Memory => write!(f, "memory"),
            StoreKind::Postgres => write!(f, "postgres"),
        }
    }
}

/// Read BACKEND_STORE. Unset means memory.
pub fn store_kind() -> Result<StoreKind, AppError> {
    match env::var("BACKEND_STORE") {
        Err(_) => Ok(StoreKind::Memory),
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "postgres" => Ok(StoreKind::Postgres),
            other => Err(AppError::config(format!(
                "BACKEND_STORE must be 'memory' or 'postgres', got '{other}'"
            ))),
        },
    }
}
