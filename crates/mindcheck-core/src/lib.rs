//! mindcheck-core
//!
//! Questionnaires, answers, results, risk bands and resources, plus the
//! bucket key layout. Shared by the scoring, storage and API crates.

pub mod error;
pub mod models;
pub mod storage_keys;
