//! One repository per mirrored table.
//!
//! Two conflict policies coexist and are fixed per table: insert-ignore for
//! the immutable-ish mirrored entities, merge for stats (latest-known state).

mod categories;
mod forums;
mod posts;
mod stats;
mod topics;
mod users;

pub use categories::CategoryRepo;
pub use forums::ForumRepo;
pub use posts::PostRepo;
pub use stats::StatRepo;
pub use topics::TopicRepo;
pub use users::UserRepo;
