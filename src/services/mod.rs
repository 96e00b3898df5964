//! Business logic services

pub mod catalog;
pub mod loans;
pub mod users;

use crate::{config::AppConfig, models::loan::LoanPolicy};

/// Container for all services
#[derive(Debug, Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoansService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services from the application configuration
    pub fn new(config: &AppConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(),
            loans: loans::LoansService::new(LoanPolicy::from(&config.loans), &config.catalogue),
            users: users::UsersService::new(),
        }
    }
}
