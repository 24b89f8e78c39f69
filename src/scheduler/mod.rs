pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;

pub use types::{EntryScheduler, SchedulerHandle};
