//! Weaned group command and query handlers.

mod list_weaned_groups;
mod retire_weaned_group;
mod separate_weaned_group;

pub use list_weaned_groups::ListWeanedGroupsHandler;
pub use retire_weaned_group::RetireWeanedGroupHandler;
pub use separate_weaned_group::{SeparateWeanedGroupCommand, SeparateWeanedGroupHandler};
