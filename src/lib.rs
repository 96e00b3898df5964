//! Library Desk
//!
//! A console library catalogue: books, magazines and journals loaded from
//! flat files, a single user borrowing and returning items, and a store
//! adding new books for the rest of the session.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod repository;
pub mod services;

pub use crate::config::AppConfig;
pub use crate::error::{AppError, AppResult};
