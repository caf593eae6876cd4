//! HTTP adapter for weaned groups and their observation log.

mod dto;
mod handlers;
mod routes;

pub(crate) use dto::WeanedGroupResponse;
pub use handlers::WeanedGroupHandlers;
pub use routes::weaned_group_routes;
