//! Console front end: startup prompts and the menu loop
//!
//! The console is generic over its reader and writer, so a whole session can
//! be driven from a byte buffer.

pub mod menu;

use chrono::{DateTime, Utc};
use std::io::{BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    input::read_line_lossy,
    models::{
        item::NewBook,
        loan::{format_date, LoanDetails},
        user::{User, UserType},
    },
    repository::{loader::parse_count, Repository},
    services::Services,
};

use menu::*;

/// Whether the menu loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Console<R, W> {
    input: R,
    output: W,
    clock: fn() -> DateTime<Utc>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clock: Utc::now,
        }
    }

    /// Replace the time source used for borrow timestamps
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `label` and read one line without its line ending.
    /// `None` means the input is exhausted.
    fn read_line(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        match read_line_lossy(&mut self.input)? {
            Some(line) => {
                if line.lossy {
                    tracing::debug!("Replaced invalid UTF-8 in console input");
                }
                Ok(Some(line.text))
            }
            None => Ok(None),
        }
    }

    /// Like `read_line`, with surrounding whitespace removed
    fn read_field(&mut self, label: &str) -> AppResult<Option<String>> {
        Ok(self.read_line(label)?.map(|answer| answer.trim().to_string()))
    }

    fn print_error(&mut self, err: &AppError) -> AppResult<()> {
        writeln!(self.output, "[ERROR] {err}")?;
        Ok(())
    }

    /// Ask for the session's user. Re-asks on empty names and unknown types.
    pub fn prompt_user(&mut self) -> AppResult<Option<User>> {
        let username = loop {
            match self.read_line(USERNAME_PROMPT)? {
                None => return Ok(None),
                Some(name) if name.trim().is_empty() => {
                    writeln!(self.output, "Username cannot be empty.")?;
                }
                Some(name) => break name.trim().to_string(),
            }
        };

        let user_type = loop {
            match self.read_line(USER_TYPE_PROMPT)? {
                None => return Ok(None),
                Some(raw) => match raw.parse::<UserType>() {
                    Ok(user_type) => break user_type,
                    Err(msg) => writeln!(self.output, "{msg}. Try again.")?,
                },
            }
        };

        tracing::info!("Session started for {} ({})", username, user_type);
        Ok(Some(User::new(&username, user_type)))
    }

    /// Run the menu until Exit is chosen or the input ends
    pub fn run(&mut self, repo: &mut Repository, services: &Services) -> AppResult<()> {
        loop {
            write!(self.output, "{}", menu_text())?;
            let Some(raw) = self.read_line(CHOICE_PROMPT)? else {
                tracing::debug!("Input closed, leaving menu loop");
                return Ok(());
            };

            let flow = match raw.parse::<MenuChoice>() {
                Ok(MenuChoice::Borrow) => self.borrow(repo, services)?,
                Ok(MenuChoice::BorrowOnLoan) => self.borrow_on_loan(repo, services)?,
                Ok(MenuChoice::Return) => self.return_item(repo, services)?,
                Ok(MenuChoice::Display) => self.display_borrowed(repo, services)?,
                Ok(MenuChoice::Register) => self.register(services)?,
                Ok(MenuChoice::Purchase) => self.purchase(repo, services)?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting the program. Goodbye!")?;
                    Flow::Exit
                }
                Err(_) => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn borrow(&mut self, repo: &mut Repository, services: &Services) -> AppResult<Flow> {
        let Some(identifier) = self.read_line(BORROW_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        match services.loans.borrow(repo, &identifier, (self.clock)()) {
            Ok(receipt) => match receipt.collection {
                Some(collection) => {
                    writeln!(self.output, "Successfully borrowed a {}.", collection.noun())?
                }
                None => writeln!(self.output, "Successfully borrowed the item.")?,
            },
            Err(e) => self.print_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn borrow_on_loan(&mut self, repo: &mut Repository, services: &Services) -> AppResult<Flow> {
        let Some(identifier) = self.read_line(BORROW_ON_LOAN_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        match services.loans.borrow_on_loan(repo, &identifier, (self.clock)()) {
            Ok(receipt) => writeln!(
                self.output,
                "Successfully borrowed the item on loan. Return by {}.",
                format_date(&receipt.due_at)
            )?,
            Err(e) => self.print_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn return_item(&mut self, repo: &mut Repository, services: &Services) -> AppResult<Flow> {
        let Some(identifier) = self.read_line(RETURN_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        match services.loans.return_item(repo, &identifier) {
            Ok(_) => writeln!(self.output, "Item returned.")?,
            Err(AppError::NotFound(_)) => writeln!(self.output, "Item not found: {identifier}")?,
            Err(e) => self.print_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn display_borrowed(&mut self, repo: &Repository, services: &Services) -> AppResult<Flow> {
        let username = services.users.active(repo).username.clone();
        writeln!(self.output, "Borrowed Items for User {username}:")?;

        let loans = services.loans.borrowed_items(repo);
        if loans.is_empty() {
            writeln!(self.output, "No items currently borrowed.")?;
            return Ok(Flow::Continue);
        }

        for loan in &loans {
            self.write_loan(loan)?;
        }
        Ok(Flow::Continue)
    }

    fn write_loan(&mut self, loan: &LoanDetails) -> AppResult<()> {
        if loan.is_catalogued() {
            for found in &loan.matches {
                writeln!(self.output, "Borrowed from {}:", found.collection)?;
                writeln!(self.output, "{}", found.item)?;
            }
        } else {
            writeln!(self.output, "Item not found: {}", loan.identifier)?;
        }

        writeln!(self.output, "Borrowed Date: {}", format_date(&loan.borrowed_at))?;
        writeln!(self.output, "Return Date: {}", format_date(&loan.due_at))?;
        if loan.is_overdue((self.clock)()) {
            writeln!(self.output, "This item is overdue.")?;
        }
        if let Some(desk) = &loan.desk {
            writeln!(self.output, "{}", desk.status_line())?;
        }
        Ok(())
    }

    fn register(&mut self, services: &Services) -> AppResult<Flow> {
        let Some(username) = self.read_line(USERNAME_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        match services.users.register(&username) {
            Ok(_) => writeln!(self.output, "User registered successfully.")?,
            Err(e) => self.print_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn purchase(&mut self, repo: &mut Repository, services: &Services) -> AppResult<Flow> {
        let Some(isbn) = self.read_field("Enter ISBN: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(authors) = self.read_field("Enter authors: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(title) = self.read_field("Enter title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(location) = self.read_field("Enter location: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(return_duration) = self.read_field("Enter return duration: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(raw_count) = self.read_field("Enter count: ")? else {
            return Ok(Flow::Exit);
        };

        let Some(count) = parse_count(&raw_count) else {
            writeln!(
                self.output,
                "[ERROR] The count must start with a whole number; you provided '{raw_count}'."
            )?;
            return Ok(Flow::Continue);
        };

        let book = NewBook {
            isbn,
            authors,
            title,
            location,
            return_duration,
            count,
        };

        match services.catalog.purchase_book(repo, book) {
            Ok(_) => writeln!(self.output, "Book purchased and added to the library.")?,
            Err(e) => self.print_error(&e)?,
        }
        Ok(Flow::Continue)
    }
}
