//! mindcheck-storage
//!
//! S3 operations. Thin wrapper around the AWS S3 SDK, plus the S3-backed
//! [`store::S3Store`] that questionnaires, results and resources live in.

pub mod client;
pub mod error;
pub mod json;
pub mod objects;
pub mod results;
pub mod store;
