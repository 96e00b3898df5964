//! Loan (borrow) model and related types

use chrono::{DateTime, Duration, Local, Utc};

use super::item::{CatalogMatch, Collection};
use super::loanable::LoanableItem;
use super::user::UserType;
use crate::config::LoansConfig;

/// Console date format, e.g. `Mon Oct 19 14:03:07 2026`
pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Format a stored UTC timestamp in local time for the console
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format(DATE_FORMAT).to_string()
}

/// `from + period`, clamped to the latest representable time
pub fn add_period(from: DateTime<Utc>, period: Duration) -> DateTime<Utc> {
    from.checked_add_signed(period)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// How an item was borrowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanKind {
    /// Plain borrow, due date follows the user type
    Regular,
    /// Borrowed through the loan desk, fixed short period
    OnLoan,
}

/// One entry of a user's ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorrowRecord {
    pub borrowed_at: DateTime<Utc>,
    pub kind: LoanKind,
}

/// Loan durations by user type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanPolicy {
    pub student: Duration,
    pub faculty: Duration,
    pub on_loan: Duration,
}

impl LoanPolicy {
    pub fn new(student_days: u32, faculty_days: u32, on_loan_days: u32) -> Self {
        Self {
            student: Duration::days(i64::from(student_days)),
            faculty: Duration::days(i64::from(faculty_days)),
            on_loan: Duration::days(i64::from(on_loan_days)),
        }
    }

    /// Loan period for a borrow of the given kind by the given user type
    pub fn period(&self, kind: LoanKind, user_type: UserType) -> Duration {
        match (kind, user_type) {
            (LoanKind::OnLoan, _) => self.on_loan,
            (LoanKind::Regular, UserType::Student) => self.student,
            (LoanKind::Regular, UserType::Faculty) => self.faculty,
        }
    }

    pub fn due_date(
        &self,
        kind: LoanKind,
        user_type: UserType,
        borrowed_at: DateTime<Utc>,
    ) -> DateTime<Utc> {
        add_period(borrowed_at, self.period(kind, user_type))
    }
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self::from(&LoansConfig::default())
    }
}

impl From<&LoansConfig> for LoanPolicy {
    fn from(config: &LoansConfig) -> Self {
        Self::new(config.student_days, config.faculty_days, config.on_loan_days)
    }
}

/// Result of a borrow operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowReceipt {
    pub identifier: String,
    /// List of the first catalogue match, `None` when the identifier is unknown
    pub collection: Option<Collection>,
    pub due_at: DateTime<Utc>,
}

/// Loan with full details for display
#[derive(Debug, Clone)]
pub struct LoanDetails {
    pub identifier: String,
    pub kind: LoanKind,
    pub borrowed_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    /// Every catalogue entry carrying this identifier, books first
    pub matches: Vec<CatalogMatch>,
    /// Loan desk entry for on-loan borrows
    pub desk: Option<LoanableItem>,
}

impl LoanDetails {
    pub fn is_catalogued(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_at < now
    }
}
