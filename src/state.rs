use crate::{db::OrmConn, password::PasswordHasher};

#[derive(Clone)]
pub struct AppState {
    pub orm: OrmConn,
    pub hasher: PasswordHasher,
}
