//! Menu entries and console labels

use std::str::FromStr;

pub const USERNAME_PROMPT: &str = "Enter username: ";
pub const USER_TYPE_PROMPT: &str = "Enter user type (1 for student, 2 for faculty): ";
pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const BORROW_PROMPT: &str = "Enter the item identifier to borrow: ";
pub const BORROW_ON_LOAN_PROMPT: &str = "Enter the item identifier to borrow on loan: ";
pub const RETURN_PROMPT: &str = "Enter the item identifier to return: ";

/// Menu entries; the discriminant is the number typed to pick one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Borrow = 1,
    BorrowOnLoan = 2,
    Return = 3,
    Display = 4,
    Register = 5,
    Purchase = 6,
    Exit = 7,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Borrow,
        MenuChoice::BorrowOnLoan,
        MenuChoice::Return,
        MenuChoice::Display,
        MenuChoice::Register,
        MenuChoice::Purchase,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Borrow => "Borrow an item",
            MenuChoice::BorrowOnLoan => "Borrow an item on loan",
            MenuChoice::Return => "Return an item",
            MenuChoice::Display => "Display borrowed items",
            MenuChoice::Register => "Register a new user",
            MenuChoice::Purchase => "Purchase a new book",
            MenuChoice::Exit => "Exit",
        }
    }

    /// The number typed to pick this entry
    pub fn number(&self) -> usize {
        *self as usize
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| Self::ALL.into_iter().find(|choice| choice.number() == n))
            .ok_or_else(|| format!("Invalid choice: {}", s.trim()))
    }
}

/// The full menu block printed before each choice
pub fn menu_text() -> String {
    let mut text = String::from("Menu:\n");
    for choice in MenuChoice::ALL {
        text.push_str(&format!("{}. {}\n", choice.number(), choice.label()));
    }
    text
}
