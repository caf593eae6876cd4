//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod auth;
pub mod breeding;
pub mod cage;
pub mod litter;
pub mod observation;
pub mod weaned;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{
    LoginCommand, LoginHandler, LoginResult, LogoutHandler, RegisterUserCommand,
    RegisterUserHandler,
};
pub use breeding::{
    BreedingPairView, CreateBreedingPairCommand, CreateBreedingPairHandler,
    DeleteBreedingPairHandler, GetBreedingPairHandler, ListBreedingPairsHandler,
    UpdateBreedingPairCommand, UpdateBreedingPairHandler,
};
pub use cage::{CageLabelService, MAX_ALLOCATION_ATTEMPTS};
pub use litter::{
    RecordLitterCommand, RecordLitterHandler, UpdateLitterCommand, UpdateLitterHandler,
    WeaningScheduleEntry, WeaningScheduleHandler,
};
pub use observation::{AddObservationCommand, AddObservationHandler, ListObservationsHandler};
pub use weaned::{
    ListWeanedGroupsHandler, RetireWeanedGroupHandler, SeparateWeanedGroupCommand,
    SeparateWeanedGroupHandler,
};
