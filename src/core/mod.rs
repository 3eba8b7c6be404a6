pub mod clock;
pub mod record_store;
pub mod week;

pub use clock::{Clock, FixedClock, SystemClock};
pub use record_store::{Mutation, RecordStore};
