//! Service layer between HTTP handlers and stores.

pub mod games;

pub use games::GameService;
