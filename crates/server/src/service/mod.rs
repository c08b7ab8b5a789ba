//! Request logic, independent of http. Every function takes the connection it
//! should use so they can run inside `DatabaseConnection::run` or directly
//! against a test connection

mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

mod log;
pub use log::*;
