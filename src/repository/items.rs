//! In-memory catalogue lists

use crate::{
    config::CatalogueConfig,
    error::AppResult,
    models::item::{CatalogMatch, Collection, Item},
};

use super::loader::{self, LoadReport};

#[derive(Debug, Clone, Default)]
pub struct ItemsRepository {
    books: Vec<Item>,
    magazines: Vec<Item>,
    journals: Vec<Item>,
}

impl ItemsRepository {
    pub fn new(books: Vec<Item>, magazines: Vec<Item>, journals: Vec<Item>) -> Self {
        Self {
            books,
            magazines,
            journals,
        }
    }

    /// Load the three lists from the configured files.
    /// A file that cannot be read leaves its list empty.
    pub fn load(catalogue: &CatalogueConfig) -> Self {
        let books = Self::load_list(
            Collection::Books,
            loader::load_books(&catalogue.books_path(), catalogue),
            &catalogue.books_path().display().to_string(),
        );
        let magazines = Self::load_list(
            Collection::Magazines,
            loader::load_magazines(&catalogue.magazines_path(), catalogue),
            &catalogue.magazines_path().display().to_string(),
        );
        let journals = Self::load_list(
            Collection::Journals,
            loader::load_journals(&catalogue.journals_path(), catalogue),
            &catalogue.journals_path().display().to_string(),
        );

        Self::new(books, magazines, journals)
    }

    fn load_list(
        collection: Collection,
        result: AppResult<LoadReport<Item>>,
        path: &str,
    ) -> Vec<Item> {
        match result {
            Ok(report) => {
                tracing::info!(
                    "Loaded {} {} from {} ({} lines skipped)",
                    report.records.len(),
                    collection,
                    path,
                    report.skipped
                );
                report.records
            }
            Err(e) => {
                tracing::error!("Failed to load file {}: {}", path, e);
                Vec::new()
            }
        }
    }

    pub fn list(&self, collection: Collection) -> &[Item] {
        match collection {
            Collection::Books => &self.books,
            Collection::Magazines => &self.magazines,
            Collection::Journals => &self.journals,
        }
    }

    /// Every item with the identifier: books, then magazines, then journals
    pub fn find(&self, identifier: &str) -> Vec<CatalogMatch> {
        [Collection::Books, Collection::Magazines, Collection::Journals]
            .into_iter()
            .filter_map(|collection| {
                self.list(collection)
                    .iter()
                    .find(|item| item.identifier == identifier)
                    .map(|item| CatalogMatch {
                        collection,
                        item: item.clone(),
                    })
            })
            .collect()
    }

    pub fn add_book(&mut self, book: Item) {
        self.books.push(book);
    }

    pub fn count(&self, collection: Collection) -> usize {
        self.list(collection).len()
    }
}
