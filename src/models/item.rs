//! Item (catalogue entry) model and related types.
//!
//! Every catalogue entry is one [`Item`]: an identifier plus an [`ItemKind`]
//! carrying the variant-specific fields. Display formatting is per kind.

use std::fmt;
use validator::Validate;

/// Variant-specific item data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Physical {
        location: String,
        return_duration: String,
    },
    Electronic {
        access_link: String,
    },
    Book {
        location: String,
        return_duration: String,
        count: i32,
        isbn: String,
        authors: String,
        title: String,
    },
    Magazine {
        location: String,
        return_duration: String,
        publication: String,
    },
    Journal {
        location: String,
        return_duration: String,
        name: String,
    },
}

/// Catalogue entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub identifier: String,
    pub kind: ItemKind,
}

impl Item {
    pub fn physical(identifier: &str, location: &str, return_duration: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            kind: ItemKind::Physical {
                location: location.to_string(),
                return_duration: return_duration.to_string(),
            },
        }
    }

    /// Build a book; the ISBN doubles as identifier
    pub fn book(book: NewBook) -> Self {
        Self {
            identifier: book.isbn.clone(),
            kind: ItemKind::Book {
                location: book.location,
                return_duration: book.return_duration,
                count: book.count,
                isbn: book.isbn,
                authors: book.authors,
                title: book.title,
            },
        }
    }

    /// Build a magazine; the publication name doubles as identifier
    pub fn magazine(publication: &str, location: &str, return_duration: &str) -> Self {
        Self {
            identifier: publication.to_string(),
            kind: ItemKind::Magazine {
                location: location.to_string(),
                return_duration: return_duration.to_string(),
                publication: publication.to_string(),
            },
        }
    }

    /// Build a journal; the journal name doubles as identifier
    pub fn journal(name: &str, location: &str, return_duration: &str) -> Self {
        Self {
            identifier: name.to_string(),
            kind: ItemKind::Journal {
                location: location.to_string(),
                return_duration: return_duration.to_string(),
                name: name.to_string(),
            },
        }
    }

    /// Shelf location, `None` for electronic items
    pub fn location(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Physical { location, .. }
            | ItemKind::Book { location, .. }
            | ItemKind::Magazine { location, .. }
            | ItemKind::Journal { location, .. } => Some(location),
            ItemKind::Electronic { .. } => None,
        }
    }

    /// Free-text return duration label, `None` for electronic items
    pub fn return_duration(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Physical { return_duration, .. }
            | ItemKind::Book { return_duration, .. }
            | ItemKind::Magazine { return_duration, .. }
            | ItemKind::Journal { return_duration, .. } => Some(return_duration),
            ItemKind::Electronic { .. } => None,
        }
    }

    /// The `Identifier: .., Location: .., Return Duration: ..` line shared by physical kinds
    fn fmt_physical_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Identifier: {}, Location: {}, Return Duration: {}",
            self.identifier,
            self.location().unwrap_or_default(),
            self.return_duration().unwrap_or_default()
        )
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ItemKind::Physical { .. } => self.fmt_physical_line(f),
            ItemKind::Electronic { access_link } => {
                write!(f, "Identifier: {}, Access Link: {}", self.identifier, access_link)
            }
            ItemKind::Book {
                count,
                isbn,
                authors,
                title,
                ..
            } => {
                self.fmt_physical_line(f)?;
                write!(
                    f,
                    "\nType: Book, Count: {} ISBN: {} Authors: {} Title: {}",
                    count, isbn, authors, title
                )
            }
            ItemKind::Magazine {
                location,
                return_duration,
                publication,
            } => write!(
                f,
                "Identifier: {}, Location: {}, Return Duration: {}",
                publication, location, return_duration
            ),
            ItemKind::Journal {
                location,
                return_duration,
                name,
            } => write!(
                f,
                "Identifier: {}, Location: {}, Return Duration: {}",
                name, location, return_duration
            ),
        }
    }
}

/// The list an item is catalogued in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Books,
    Magazines,
    Journals,
}

impl Collection {
    /// Singular noun used in borrow confirmations
    pub fn noun(&self) -> &'static str {
        match self {
            Collection::Books => "book",
            Collection::Magazines => "magazine",
            Collection::Journals => "journal",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Collection::Books => "Books",
            Collection::Magazines => "Magazines",
            Collection::Journals => "Journals",
        };
        write!(f, "{}", label)
    }
}

/// An item found by identifier, with the list it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogMatch {
    pub collection: Collection,
    pub item: Item,
}

/// New book request (store purchase)
#[derive(Debug, Clone, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "ISBN cannot be empty"))]
    pub isbn: String,
    pub authors: String,
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    pub location: String,
    pub return_duration: String,
    pub count: i32,
}
