//! Flat-file loaders for the catalogue lists
//!
//! `books.csv` rows are `count,isbn,authors,title` without a header.
//! `magazines.csv` and `journals.csv` hold one name per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{
    config::CatalogueConfig,
    error::AppResult,
    input::read_line_lossy,
    models::item::{Item, NewBook},
};

/// Records read from one file, and how many lines were rejected
#[derive(Debug)]
pub struct LoadReport<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

impl<T> Default for LoadReport<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
        }
    }
}

/// Remove one pair of surrounding double quotes
pub fn strip_quotes(field: &str) -> &str {
    if field.starts_with('"') && field.ends_with('"') {
        if field.len() >= 2 {
            &field[1..field.len() - 1]
        } else {
            ""
        }
    } else {
        field
    }
}

/// Parse a count the way the catalogue files write it: optional leading
/// whitespace, an optional sign, then digits. Anything after the digits is
/// ignored, so `12abc` reads as 12. `None` when no digits lead the token or
/// the value does not fit an `i32`.
pub fn parse_count(token: &str) -> Option<i32> {
    let s = token.trim_start();
    let sign_len = usize::from(s.starts_with('+') || s.starts_with('-'));
    let digits = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// Parse one book row. `Err` carries the offending count token.
fn parse_book_line(line: &str, catalogue: &CatalogueConfig) -> Result<Item, String> {
    let mut fields = line.split(',');

    let token = fields.next().unwrap_or_default();
    let count = parse_count(token).ok_or_else(|| token.to_string())?;

    let mut next_field = || strip_quotes(fields.next().unwrap_or_default()).to_string();
    let isbn = next_field();
    let authors = next_field();
    let title = next_field();

    Ok(Item::book(NewBook {
        isbn,
        authors,
        title,
        location: catalogue.default_location.clone(),
        return_duration: catalogue.default_return_duration.clone(),
        count,
    }))
}

pub fn parse_books<R: BufRead>(mut reader: R, catalogue: &CatalogueConfig) -> AppResult<LoadReport<Item>> {
    let mut report = LoadReport::default();
    let mut line_num = 0;

    while let Some(line) = read_line_lossy(&mut reader)? {
        line_num += 1;
        if line.lossy {
            tracing::warn!("Invalid UTF-8 at line {}, replaced unreadable bytes", line_num);
        }

        match parse_book_line(&line.text, catalogue) {
            Ok(book) => report.records.push(book),
            Err(token) => {
                tracing::warn!("Invalid count at line {}: {:?}", line_num, token);
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Read one name per line, skipping blank lines
fn parse_names<R, F>(mut reader: R, build: F) -> AppResult<LoadReport<Item>>
where
    R: BufRead,
    F: Fn(&str) -> Item,
{
    let mut report = LoadReport::default();
    let mut line_num = 0;

    while let Some(line) = read_line_lossy(&mut reader)? {
        line_num += 1;
        if line.lossy {
            tracing::warn!("Invalid UTF-8 at line {}, replaced unreadable bytes", line_num);
        }

        let name = line.text.as_str();
        if name.trim().is_empty() {
            report.skipped += 1;
            continue;
        }
        report.records.push(build(name));
    }

    Ok(report)
}

pub fn parse_magazines<R: BufRead>(reader: R, catalogue: &CatalogueConfig) -> AppResult<LoadReport<Item>> {
    parse_names(reader, |name| {
        Item::magazine(name, &catalogue.default_location, &catalogue.default_return_duration)
    })
}

pub fn parse_journals<R: BufRead>(reader: R, catalogue: &CatalogueConfig) -> AppResult<LoadReport<Item>> {
    parse_names(reader, |name| {
        Item::journal(name, &catalogue.default_location, &catalogue.default_return_duration)
    })
}

fn open(path: &Path) -> AppResult<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

pub fn load_books(path: &Path, catalogue: &CatalogueConfig) -> AppResult<LoadReport<Item>> {
    parse_books(open(path)?, catalogue)
}

pub fn load_magazines(path: &Path, catalogue: &CatalogueConfig) -> AppResult<LoadReport<Item>> {
    parse_magazines(open(path)?, catalogue)
}

pub fn load_journals(path: &Path, catalogue: &CatalogueConfig) -> AppResult<LoadReport<Item>> {
    parse_journals(open(path)?, catalogue)
}
