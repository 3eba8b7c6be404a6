pub mod entry;
pub mod fields;
pub mod statistics;

pub use entry::Entry;
pub use fields::{EntryDraft, EntryFields, ValidationError};
pub use statistics::Statistics;
