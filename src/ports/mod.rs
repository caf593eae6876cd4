//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Colony Ports
//!
//! - `BreedingPairRepository`, `LitterRepository`, `WeanedGroupRepository`,
//!   `ObservationRepository` - record persistence
//! - `CageLabelSource` - the read-only label queries the cage allocator scans
//!
//! ## Auth Ports
//!
//! - `UserRepository` - staff accounts
//! - `SessionStore` / `SessionValidator` - login sessions

mod breeding_pair_repository;
mod cage_label_source;
mod litter_repository;
mod observation_repository;
mod session_store;
mod session_validator;
mod user_repository;
mod weaned_group_repository;

pub use breeding_pair_repository::BreedingPairRepository;
pub use cage_label_source::CageLabelSource;
pub use litter_repository::LitterRepository;
pub use observation_repository::ObservationRepository;
pub use session_store::SessionStore;
pub use session_validator::SessionValidator;
pub use user_repository::UserRepository;
pub use weaned_group_repository::WeanedGroupRepository;
