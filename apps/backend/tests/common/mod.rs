#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use actix_web::web;
use backend::repos::memory::MemoryGameStore;
use backend::state::app_state::AppState;

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::test_logging::init();
}

/// Application state over a fresh in-memory store.
pub fn memory_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(Arc::new(MemoryGameStore::default())))
}
