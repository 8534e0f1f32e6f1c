//! mirrorctl-db: the local-storage half of the forum mirror.
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Idempotent writes: re-delivery of the same upstream record is a no-op
//! - Independent per-row updates fan out concurrently and join fail-fast

pub mod error;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod repos;

pub use error::{DbError, DbResult};
pub use models::PLACEHOLDER_ID;
pub use pool::create_pool;
pub use repos::*;
