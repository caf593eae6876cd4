//! Litter command and query handlers.

mod record_litter;
mod update_litter;
mod weaning_schedule;

pub use record_litter::{RecordLitterCommand, RecordLitterHandler};
pub use update_litter::{UpdateLitterCommand, UpdateLitterHandler};
pub use weaning_schedule::{WeaningScheduleEntry, WeaningScheduleHandler};
