use const_format::concatcp;

use crate::types::Uuid;

pub mod error;
pub mod payloads;
pub mod response_errors;

pub const API_BASE_PATH: &str = "/api/";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Users,
    UserExercises,
    UserLogs,
}

impl Object {
    pub const fn path(&self) -> &str {
        use Object::*;
        match self {
            Users => concatcp!(API_BASE_PATH, "users"),
            UserExercises => concatcp!(API_BASE_PATH, "users/:id/exercises"),
            UserLogs => concatcp!(API_BASE_PATH, "users/:id/logs"),
        }
    }

    /// The path with the `:id` segment filled in
    pub fn path_for(&self, id: &Uuid) -> String {
        self.path().replace(":id", &id.to_string())
    }
}
