//! User accounts for colony staff.

mod account;
mod errors;

pub use account::{normalize_email, UserAccount, MIN_PASSWORD_LENGTH};
pub use errors::AccountError;
