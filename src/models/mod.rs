//! Data models for Library Desk

pub mod item;
pub mod loan;
pub mod loanable;
pub mod user;

// Re-export commonly used types
pub use item::{CatalogMatch, Collection, Item, ItemKind, NewBook};
pub use loan::{BorrowReceipt, BorrowRecord, LoanDetails, LoanKind, LoanPolicy};
pub use loanable::LoanableItem;
pub use user::{User, UserType};
