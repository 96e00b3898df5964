//! Repository layer: in-memory catalogue, loan desk and active user

pub mod items;
pub mod loader;
pub mod loans;
pub mod users;

use crate::models::user::User;

/// Main repository struct holding all in-memory state
#[derive(Debug, Clone)]
pub struct Repository {
    pub items: items::ItemsRepository,
    pub loans: loans::LoansRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a repository around already-loaded items
    pub fn new(items: items::ItemsRepository, user: User) -> Self {
        Self {
            items,
            loans: loans::LoansRepository::new(),
            users: users::UsersRepository::new(user),
        }
    }
}
