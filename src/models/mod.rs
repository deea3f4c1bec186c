//! Scheduling domain models.
//!
//! Provides the data types a scheduling run consumes and produces.
//!
//! | Type | Role |
//! |------|------|
//! | Job | Input unit of work, annotated with start/end once scheduled |
//! | Core | Identical processing unit with a next-available time |
//! | QueueSnapshot | Waiting job ids observed at one simulated instant |

mod core;
mod job;
mod snapshot;

pub use self::core::{earliest_available, Core};
pub use job::Job;
pub use snapshot::QueueSnapshot;
