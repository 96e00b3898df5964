//! Loan management service

use chrono::{DateTime, Utc};

use crate::{
    config::CatalogueConfig,
    error::{AppError, AppResult},
    models::{
        item::Item,
        loan::{format_date, BorrowReceipt, LoanDetails, LoanKind, LoanPolicy},
        loanable::LoanableItem,
    },
    repository::Repository,
};

#[derive(Debug, Clone)]
pub struct LoansService {
    policy: LoanPolicy,
    default_location: String,
    default_return_duration: String,
}

impl LoansService {
    pub fn new(policy: LoanPolicy, catalogue: &CatalogueConfig) -> Self {
        Self {
            policy,
            default_location: catalogue.default_location.clone(),
            default_return_duration: catalogue.default_return_duration.clone(),
        }
    }

    fn check_identifier(identifier: &str) -> AppResult<()> {
        if identifier.trim().is_empty() {
            return Err(AppError::Validation("Item identifier cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Borrow an item for the active user.
    ///
    /// The loan is recorded even when no catalogue entry carries the
    /// identifier; the listing reports such entries as not found.
    pub fn borrow(
        &self,
        repo: &mut Repository,
        identifier: &str,
        now: DateTime<Utc>,
    ) -> AppResult<BorrowReceipt> {
        Self::check_identifier(identifier)?;

        let collection = repo.items.find(identifier).first().map(|m| m.collection);
        if collection.is_none() {
            tracing::warn!("Borrowing uncatalogued identifier {:?}", identifier);
        }

        let user = repo.users.active_mut();
        if user.record_borrow(identifier, LoanKind::Regular, now).is_some() {
            tracing::debug!("Replaced existing borrow record for {:?}", identifier);
        }
        let due_at = self.policy.due_date(LoanKind::Regular, user.user_type, now);

        tracing::info!(
            "User {} borrowed {:?} ({}), due {}",
            user.username,
            identifier,
            user.user_type,
            due_at
        );

        Ok(BorrowReceipt {
            identifier: identifier.to_string(),
            collection,
            due_at,
        })
    }

    /// Borrow an item through the loan desk for the short on-loan period
    pub fn borrow_on_loan(
        &self,
        repo: &mut Repository,
        identifier: &str,
        now: DateTime<Utc>,
    ) -> AppResult<BorrowReceipt> {
        Self::check_identifier(identifier)?;

        if let Some(entry) = repo.loans.get(identifier) {
            if !entry.can_be_borrowed() {
                let until = entry
                    .return_date()
                    .map(|d| format_date(&d))
                    .unwrap_or_default();
                return Err(AppError::BusinessRule(format!(
                    "{} is already on loan until {}",
                    identifier, until
                )));
            }
        }

        let user_type = repo.users.active().user_type;
        let period = self.policy.period(LoanKind::OnLoan, user_type);
        let matches = repo.items.find(identifier);
        let collection = matches.first().map(|m| m.collection);

        match repo.loans.get_mut(identifier) {
            Some(entry) => entry.borrow(now, period),
            None => {
                let item = matches.into_iter().next().map(|m| m.item).unwrap_or_else(|| {
                    Item::physical(identifier, &self.default_location, &self.default_return_duration)
                });
                repo.loans.register(LoanableItem::new(item)).borrow(now, period);
            }
        }

        let user = repo.users.active_mut();
        user.record_borrow(identifier, LoanKind::OnLoan, now);
        let due_at = self.policy.due_date(LoanKind::OnLoan, user_type, now);

        tracing::info!(
            "User {} borrowed {:?} on loan, due {}",
            user.username,
            identifier,
            due_at
        );

        Ok(BorrowReceipt {
            identifier: identifier.to_string(),
            collection,
            due_at,
        })
    }

    /// Return a borrowed item, freeing its loan desk entry if it has one
    pub fn return_item(&self, repo: &mut Repository, identifier: &str) -> AppResult<LoanKind> {
        let record = repo
            .users
            .active_mut()
            .remove_borrow(identifier)
            .ok_or_else(|| AppError::NotFound(format!("{} is not borrowed", identifier)))?;

        if let Some(entry) = repo.loans.get_mut(identifier) {
            entry.return_item();
        }

        tracing::info!("User {} returned {:?}", repo.users.active().username, identifier);
        Ok(record.kind)
    }

    /// Borrowed items of the active user, in identifier order
    pub fn borrowed_items(&self, repo: &Repository) -> Vec<LoanDetails> {
        let user = repo.users.active();

        user.borrowed_items()
            .map(|(identifier, record)| LoanDetails {
                identifier: identifier.to_string(),
                kind: record.kind,
                borrowed_at: record.borrowed_at,
                due_at: self
                    .policy
                    .due_date(record.kind, user.user_type, record.borrowed_at),
                matches: repo.items.find(identifier),
                desk: match record.kind {
                    LoanKind::OnLoan => repo.loans.get(identifier).cloned(),
                    LoanKind::Regular => None,
                },
            })
            .collect()
    }
}
