//! Authentication handlers.

mod login;
mod logout;
mod register_user;

pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use logout::LogoutHandler;
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
