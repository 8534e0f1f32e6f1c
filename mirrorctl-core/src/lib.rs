//! mirrorctl-core: configuration and error types for the forum mirror.
//!
//! Everything that talks to the database lives in `mirrorctl-db`; this crate
//! only knows how the mirror is configured and how its failures are shaped.

pub mod config;
pub mod error;

pub use config::MirrorConfig;
pub use error::{MirrorError, Result};
