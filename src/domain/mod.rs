//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, auth types)
//! - `colony` - Strains, cage labels and allocation, breeding pairs, litters,
//!   weaned groups, observations
//! - `user` - Staff accounts and password verification

pub mod colony;
pub mod foundation;
pub mod user;
