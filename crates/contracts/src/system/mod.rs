pub mod auth;
pub mod permissions;
pub mod staff;
pub mod users;
