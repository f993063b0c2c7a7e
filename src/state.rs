use std::sync::Arc;

use crate::{db::OrmConn, password::PasswordScheme};

#[derive(Clone)]
pub struct AppState {
    pub orm: Arc<OrmConn>,
    pub passwords: Arc<dyn PasswordScheme>,
}

impl AppState {
    pub fn new(orm: impl Into<Arc<OrmConn>>, passwords: Arc<dyn PasswordScheme>) -> Self {
        Self {
            orm: orm.into(),
            passwords,
        }
    }
}
