//! User registration

use crate::{
    error::{AppError, AppResult},
    models::user::User,
    repository::Repository,
};

#[derive(Debug, Clone, Default)]
pub struct UsersService;

impl UsersService {
    pub fn new() -> Self {
        Self
    }

    pub fn active<'a>(&self, repo: &'a Repository) -> &'a User {
        repo.users.active()
    }

    /// Register a user name. The session keeps its active user.
    pub fn register(&self, username: &str) -> AppResult<String> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::Validation("Username cannot be empty".to_string()));
        }

        tracing::info!("Registered user {:?}", username);
        Ok(username.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserType;
    use crate::repository::items::ItemsRepository;

    #[test]
    fn test_register_keeps_active_user() {
        let repo = Repository::new(ItemsRepository::default(), User::new("Ajay", UserType::Student));
        let service = UsersService::new();

        assert_eq!(service.register("  Priya \n").unwrap(), "Priya");
        assert_eq!(service.active(&repo).username, "Ajay");
    }

    #[test]
    fn test_register_rejects_empty_name() {
        assert!(matches!(
            UsersService::new().register("   "),
            Err(AppError::Validation(_))
        ));
    }
}
