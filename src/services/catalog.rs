//! Catalogue service: lookups and the book store

use validator::Validate;

use crate::{
    error::AppResult,
    models::item::{Collection, Item, NewBook},
    repository::Repository,
};

/// Item counts per list, plus loan desk entries currently out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub books: usize,
    pub magazines: usize,
    pub journals: usize,
    pub on_loan: usize,
}

impl std::fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} books, {} magazines, {} journals, {} on loan",
            self.books, self.magazines, self.journals, self.on_loan
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// Add a purchased book to the catalogue
    pub fn purchase_book(&self, repo: &mut Repository, book: NewBook) -> AppResult<Item> {
        book.validate()?;

        if !repo.items.find(&book.isbn).is_empty() {
            tracing::warn!("Purchased ISBN {} is already catalogued", book.isbn);
        }

        let item = Item::book(book);
        repo.items.add_book(item.clone());
        tracing::info!("Book {} purchased and added to the library", item.identifier);
        Ok(item)
    }

    pub fn summary(&self, repo: &Repository) -> CatalogSummary {
        CatalogSummary {
            books: repo.items.count(Collection::Books),
            magazines: repo.items.count(Collection::Magazines),
            journals: repo.items.count(Collection::Journals),
            on_loan: repo.loans.count_on_loan(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::loanable::LoanableItem;
    use crate::models::user::{User, UserType};
    use crate::repository::items::ItemsRepository;

    fn new_book(isbn: &str, title: &str) -> NewBook {
        NewBook {
            isbn: isbn.to_string(),
            authors: "Harper Lee".to_string(),
            title: title.to_string(),
            location: "Shelf B".to_string(),
            return_duration: "3 weeks".to_string(),
            count: 4,
        }
    }

    fn empty_repo() -> Repository {
        Repository::new(ItemsRepository::default(), User::new("Ajay", UserType::Student))
    }

    #[test]
    fn test_purchased_book_is_findable() {
        let mut repo = empty_repo();
        let service = CatalogService::new();

        service
            .purchase_book(&mut repo, new_book("0061120081", "To Kill a Mockingbird"))
            .unwrap();

        let found = repo.items.find("0061120081");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].collection, Collection::Books);
        assert_eq!(found[0].item.location(), Some("Shelf B"));
        assert_eq!(service.summary(&repo).books, 1);
    }

    #[test]
    fn test_purchase_rejects_empty_isbn() {
        let mut repo = empty_repo();
        let result = CatalogService::new().purchase_book(&mut repo, new_book("", "Untitled"));
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(repo.items.count(Collection::Books), 0);
    }

    #[test]
    fn test_summary_counts_desk_items_out() {
        let mut repo = empty_repo();
        let now = chrono::Utc::now();
        repo.loans
            .register(LoanableItem::new(Item::physical("ATLAS-1", "Map room", "1 week")))
            .borrow(now, chrono::Duration::days(7));
        repo.loans
            .register(LoanableItem::new(Item::physical("ATLAS-2", "Map room", "1 week")));

        let summary = CatalogService::new().summary(&repo);
        assert_eq!(summary.on_loan, 1);
        assert!(summary.to_string().ends_with("1 on loan"));
    }

    #[test]
    fn test_summary_display() {
        let summary = CatalogSummary {
            books: 2,
            magazines: 1,
            journals: 0,
            on_loan: 1,
        };
        assert_eq!(summary.to_string(), "2 books, 1 magazines, 0 journals, 1 on loan");
    }
}
