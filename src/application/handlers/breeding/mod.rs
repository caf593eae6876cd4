//! Breeding pair command and query handlers.

mod create_breeding_pair;
mod delete_breeding_pair;
mod get_breeding_pair;
mod list_breeding_pairs;
mod update_breeding_pair;

pub use create_breeding_pair::{CreateBreedingPairCommand, CreateBreedingPairHandler};
pub use delete_breeding_pair::DeleteBreedingPairHandler;
pub use get_breeding_pair::{BreedingPairView, GetBreedingPairHandler};
pub use list_breeding_pairs::ListBreedingPairsHandler;
pub use update_breeding_pair::{UpdateBreedingPairCommand, UpdateBreedingPairHandler};
