//! Loan desk items: physical items with an explicit on-loan flag

use chrono::{DateTime, Duration, Utc};

use super::item::Item;
use super::loan::{add_period, format_date};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanableItem {
    pub item: Item,
    on_loan: bool,
    return_date: Option<DateTime<Utc>>,
}

impl LoanableItem {
    pub fn new(item: Item) -> Self {
        Self {
            item,
            on_loan: false,
            return_date: None,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.item.identifier
    }

    pub fn can_be_borrowed(&self) -> bool {
        !self.on_loan
    }

    pub fn is_on_loan(&self) -> bool {
        self.on_loan
    }

    /// Last return date set by [`LoanableItem::borrow`]; kept after the item comes back
    pub fn return_date(&self) -> Option<DateTime<Utc>> {
        self.return_date
    }

    pub fn borrow(&mut self, now: DateTime<Utc>, period: Duration) {
        self.on_loan = true;
        self.return_date = Some(add_period(now, period));
    }

    pub fn return_item(&mut self) {
        self.on_loan = false;
    }

    /// One-line status shown under the item details
    pub fn status_line(&self) -> String {
        match (self.on_loan, self.return_date) {
            (true, Some(date)) => format!("Item is on loan until {}", format_date(&date)),
            _ => "Item is available for borrowing".to_string(),
        }
    }
}
