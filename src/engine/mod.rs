//! The push-based propagation engine: value ledger, commit scheduling, and
//! the engine facade.
pub mod ledger;
pub mod schedule;
pub mod signal;

pub use ledger::{Ledger, PropagationError};
pub use schedule::CommitSchedule;
pub use signal::SignalEngine;
