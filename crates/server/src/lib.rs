pub mod cli;

pub mod db;

mod errors;
pub use errors::*;

mod state;
pub use state::*;

pub mod routes;

pub mod service;
