//! Loan desk: items lent through the on-loan counter

use crate::models::loanable::LoanableItem;

#[derive(Debug, Clone, Default)]
pub struct LoansRepository {
    desk: Vec<LoanableItem>,
}

impl LoansRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identifier: &str) -> Option<&LoanableItem> {
        self.desk.iter().find(|entry| entry.identifier() == identifier)
    }

    pub fn get_mut(&mut self, identifier: &str) -> Option<&mut LoanableItem> {
        self.desk.iter_mut().find(|entry| entry.identifier() == identifier)
    }

    /// Add an entry and hand it back for updating
    pub fn register(&mut self, entry: LoanableItem) -> &mut LoanableItem {
        self.desk.push(entry);
        let last = self.desk.len() - 1;
        &mut self.desk[last]
    }

    pub fn count_on_loan(&self) -> usize {
        self.desk.iter().filter(|entry| entry.is_on_loan()).count()
    }
}
