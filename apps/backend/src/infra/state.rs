use std::sync::Arc;

use crate::config::db::{DbOwner, DbProfile};
use crate::config::store::StoreKind;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::repos::games::GameStore;
use crate::repos::memory::MemoryGameStore;
use crate::repos::sea::SeaGameStore;

/// Build the game store selected by configuration (used in both tests
/// and main).
///
/// The memory store needs no environment. Postgres connects with the app
/// role against the given profile; migrations are run separately.
pub async fn build_store(
    kind: StoreKind,
    profile: DbProfile,
) -> Result<Arc<dyn GameStore>, AppError> {
    match kind {
        StoreKind::Memory => Ok(Arc::new(MemoryGameStore::new())),
        StoreKind::Postgres => {
            let conn = connect_db(profile, DbOwner::App).await?;
            Ok(Arc::new(SeaGameStore::new(conn)))
        }
    }
}
