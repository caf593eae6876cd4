//! Observation command and query handlers.

mod add_observation;
mod list_observations;

pub use add_observation::{AddObservationCommand, AddObservationHandler};
pub use list_observations::ListObservationsHandler;
