//! Shared configuration for domain test suites.

use proptest::prelude::ProptestConfig;

/// Proptest config honoring `PROPTEST_CASES` and
/// `PROPTEST_MAX_SHRINK_MS` so CI can dial effort up or down.
pub fn proptest_config() -> ProptestConfig {
    let base = ProptestConfig::default();

    let cases: u32 = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(8)
        .max(1);

    let max_shrink_time: u32 = std::env::var("PROPTEST_MAX_SHRINK_MS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(base.max_shrink_time);

    ProptestConfig {
        // No persistence: keeps regression files out of the tree.
        failure_persistence: None,
        cases,
        max_shrink_time,
        ..base
    }
}
