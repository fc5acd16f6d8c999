mod entry;
mod store;

pub(crate) use entry::{HistoryEntry, format_fixed};
pub(crate) use store::HistoryLog;
