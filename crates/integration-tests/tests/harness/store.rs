use std::collections::HashMap;
use std::io;

use apperror::{AppError, ErrorKind, forbidden, new_not_found, validation};

/// In-memory user store standing in for a database
#[derive(Debug, Default)]
pub struct UserStore {
    users: HashMap<u64, User>,
}

#[derive(Debug, Clone)]
pub struct User {
    pub name: String,
    pub banned: bool,
}

impl UserStore {
    pub fn with_user(mut self, id: u64, name: &str, banned: bool) -> Self {
        self.users.insert(
            id,
            User {
                name: name.to_owned(),
                banned,
            },
        );
        self
    }

    /// Raw lookup failing with a low-level error
    fn load(&self, id: u64) -> io::Result<&User> {
        self.users
            .get(&id)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no row for user id {id}")))
    }

    /// Service-level lookup classifying failures
    pub async fn user_name(&self, id: u64) -> Result<String, AppError> {
        tokio::task::yield_now().await;

        if id == 0 {
            return Err(validation(None));
        }

        let user = self
            .load(id)
            .map_err(|e| new_not_found("Пользователь не найден", Some(e.into())))?;

        if user.banned {
            return Err(forbidden(None));
        }

        Ok(user.name.clone())
    }

    /// Lookup that fails with an opaque internal error
    pub async fn audit(&self, id: u64) -> Result<(), AppError> {
        tokio::task::yield_now().await;

        let result: anyhow::Result<()> = Err(anyhow::anyhow!("audit log unavailable for {id}"));
        result?;
        Ok(())
    }

    /// Lookup that is rejected before reaching the store
    pub fn rate_limited() -> Result<String, AppError> {
        Err(ErrorKind::TooManyRequests.into())
    }
}
