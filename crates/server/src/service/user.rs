use rusqlite::Connection;
use shared::{
    api::error::{Nothing, ServerError},
    model::User,
};
use tracing::{info, instrument};

/// Usernames are not unique, every call creates a new user
#[instrument(skip(conn))]
pub fn create_user(conn: &mut Connection, username: String) -> Result<User, ServerError<Nothing>> {
    let user = User::create(conn, User::new(username))?;
    info!(user_id = %user.id, "Created user");
    Ok(user)
}

#[instrument(skip(conn))]
pub fn list_users(conn: &Connection) -> Result<Vec<User>, ServerError<Nothing>> {
    Ok(User::fetch_all(conn)?)
}
