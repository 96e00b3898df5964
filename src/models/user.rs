//! User model and related types

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use super::loan::{BorrowRecord, LoanKind};

/// User types, deciding the regular loan period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserType {
    #[default]
    Student,
    Faculty,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Faculty => "faculty",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accepts the menu codes (`1` student, `2` faculty) or the names
impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "student" => Ok(UserType::Student),
            "2" | "faculty" => Ok(UserType::Faculty),
            other => Err(format!("Invalid user type: {}", other)),
        }
    }
}

/// The library user and their borrow ledger
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub user_type: UserType,
    borrowed: BTreeMap<String, BorrowRecord>,
}

impl User {
    pub fn new(username: &str, user_type: UserType) -> Self {
        Self {
            username: username.to_string(),
            user_type,
            borrowed: BTreeMap::new(),
        }
    }

    /// Record a borrow. An existing entry for the identifier is overwritten.
    pub fn record_borrow(
        &mut self,
        identifier: &str,
        kind: LoanKind,
        borrowed_at: DateTime<Utc>,
    ) -> Option<BorrowRecord> {
        self.borrowed
            .insert(identifier.to_string(), BorrowRecord { borrowed_at, kind })
    }

    pub fn remove_borrow(&mut self, identifier: &str) -> Option<BorrowRecord> {
        self.borrowed.remove(identifier)
    }

    /// Ledger entries in identifier order
    pub fn borrowed_items(&self) -> impl Iterator<Item = (&str, &BorrowRecord)> {
        self.borrowed.iter().map(|(id, record)| (id.as_str(), record))
    }

    pub fn borrowed_count(&self) -> usize {
        self.borrowed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_user_type_parsing() {
        assert_eq!("1".parse::<UserType>(), Ok(UserType::Student));
        assert_eq!(" 2\n".parse::<UserType>(), Ok(UserType::Faculty));
        assert_eq!("Faculty".parse::<UserType>(), Ok(UserType::Faculty));
        assert!("3".parse::<UserType>().is_err());
        assert!("".parse::<UserType>().is_err());
    }

    #[test]
    fn test_reborrow_overwrites_entry() {
        let first = Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap();
        let second = first + Duration::days(3);
        let mut user = User::new("Ajay", UserType::Student);

        assert!(user.record_borrow("Nature", LoanKind::Regular, first).is_none());
        let previous = user.record_borrow("Nature", LoanKind::OnLoan, second);

        assert_eq!(previous.map(|r| r.borrowed_at), Some(first));
        assert_eq!(user.borrowed_count(), 1);
        let (_, record) = user.borrowed_items().next().unwrap();
        assert_eq!(record.borrowed_at, second);
        assert_eq!(record.kind, LoanKind::OnLoan);
    }

    #[test]
    fn test_ledger_is_ordered_by_identifier() {
        let now = Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap();
        let mut user = User::new("Ajay", UserType::Faculty);
        user.record_borrow("b", LoanKind::Regular, now);
        user.record_borrow("a", LoanKind::Regular, now);

        let ids: Vec<&str> = user.borrowed_items().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["a", "b"]);

        assert!(user.remove_borrow("a").is_some());
        assert!(user.remove_borrow("a").is_none());
        assert_eq!(user.borrowed_count(), 1);
    }
}
