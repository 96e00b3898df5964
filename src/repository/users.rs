//! The active user of this session

use crate::models::user::User;

#[derive(Debug, Clone)]
pub struct UsersRepository {
    active: User,
}

impl UsersRepository {
    pub fn new(active: User) -> Self {
        Self { active }
    }

    pub fn active(&self) -> &User {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut User {
        &mut self.active
    }
}
