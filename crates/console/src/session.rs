//! Interactive menu loop.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use libris_auth::{authorize, CredentialStore, Permission, Principal};
use libris_core::{Clock, HolderId, ItemId, SystemClock};
use libris_inventory::InventoryStore;

use crate::config::OutputFormat;
use crate::render;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode listing: {0}")]
    Encode(#[from] serde_json::Error),

    /// Input was closed mid-session; treated as a normal exit by [`Session::run`].
    #[error("input ended")]
    EndOfInput,
}

/// One store operation requested from a menu, with its parameters collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddBook { title: String, author: String },
    AddEBook { title: String, author: String, format: String },
    Remove(ItemId),
    Borrow(ItemId, HolderId),
    Return(ItemId),
    ViewAll,
}

impl Action {
    pub fn required_permission(&self) -> Permission {
        match self {
            Action::AddBook { .. } | Action::AddEBook { .. } | Action::Remove(_) => {
                Permission::ItemsWrite
            }
            Action::Borrow(..) | Action::Return(_) => Permission::LoansManage,
            Action::ViewAll => Permission::ItemsRead,
        }
    }
}

/// A console session over one inventory and one credential table.
///
/// The session borrows both stores; they outlive it and can be inspected
/// afterwards.
pub struct Session<'a, R, W, C = SystemClock> {
    input: R,
    output: W,
    store: &'a mut InventoryStore<C>,
    credentials: &'a mut CredentialStore,
    format: OutputFormat,
}

impl<'a, R, W, C> Session<'a, R, W, C>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    pub fn new(
        input: R,
        output: W,
        store: &'a mut InventoryStore<C>,
        credentials: &'a mut CredentialStore,
    ) -> Self {
        Self {
            input,
            output,
            store,
            credentials,
            format: OutputFormat::Text,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), SessionError> {
        match self.main_menu() {
            Err(SessionError::EndOfInput) => {
                tracing::debug!("input closed; ending session");
                Ok(())
            }
            other => other,
        }
    }

    /// Perform `action` on behalf of `principal`, printing the outcome.
    pub fn execute(&mut self, principal: &Principal, action: Action) -> Result<(), SessionError> {
        if let Err(err) = authorize(principal, action.required_permission()) {
            return self.say(&render::denied(&err));
        }

        let lines = match action {
            Action::AddBook { title, author } => {
                vec![render::added(&self.store.add_physical(title, author))]
            }
            Action::AddEBook {
                title,
                author,
                format,
            } => vec![render::added(&self.store.add_electronic(title, author, format))],
            Action::Remove(id) => vec![match self.store.remove(id) {
                Ok(summary) => render::removed(&summary),
                Err(err) => render::lending_error(&err),
            }],
            Action::Borrow(id, holder) => vec![match self.store.borrow(id, holder) {
                Ok(summary) => render::borrowed(&summary),
                Err(err) => render::lending_error(&err),
            }],
            Action::Return(id) => match self.store.return_item(id) {
                Ok(receipt) => render::returned(&receipt),
                Err(err) => vec![render::lending_error(&err)],
            },
            Action::ViewAll => vec![render::listing(&self.store.list_all(), self.format)?],
        };

        for line in &lines {
            self.say(line)?;
        }
        Ok(())
    }

    fn main_menu(&mut self) -> Result<(), SessionError> {
        loop {
            self.say("")?;
            self.say("Welcome to the Library Management System")?;
            self.say("1. Staff")?;
            self.say("2. Patron")?;
            self.say("3. Exit")?;

            match self.read_choice("Choose an option: ")? {
                Some(1) => self.staff_entry()?,
                Some(2) => self.patron_menu()?,
                Some(3) => return self.say("Exiting the system. Goodbye!"),
                _ => self.say("Invalid option. Returning to the main menu.")?,
            }
        }
    }

    fn staff_entry(&mut self) -> Result<(), SessionError> {
        self.say("1. Create Account")?;
        self.say("2. Login")?;

        match self.read_choice("Choose an option: ")? {
            Some(1) => {
                let username = self.read_line("Enter new username: ")?;
                let password = self.read_line("Enter new password: ")?;
                match self.credentials.create_account(username, password) {
                    Ok(()) => self.say("Account created successfully!"),
                    Err(err) => self.say(&render::auth_error(&err)),
                }
            }
            Some(2) => {
                let username = self.read_line("Enter staff username: ")?;
                let password = self.read_line("Enter staff password: ")?;
                match self.credentials.authenticate(&username, &password) {
                    Ok(principal) => {
                        tracing::info!(username = %username, "staff logged in");
                        self.staff_menu(&principal)
                    }
                    Err(err) => self.say(&render::auth_error(&err)),
                }
            }
            _ => self.say("Invalid choice. Returning to main menu."),
        }
    }

    fn staff_menu(&mut self, principal: &Principal) -> Result<(), SessionError> {
        loop {
            self.say("")?;
            self.say("Staff Menu")?;
            self.say("1. Add Book")?;
            self.say("2. Add EBook")?;
            self.say("3. Remove Item")?;
            self.say("4. Borrow Item")?;
            self.say("5. Return Item")?;
            self.say("6. View All Items")?;
            self.say("7. Logout")?;

            let action = match self.read_choice("Choose an option: ")? {
                Some(1) => Action::AddBook {
                    title: self.read_line("Enter book title: ")?,
                    author: self.read_line("Enter book author: ")?,
                },
                Some(2) => Action::AddEBook {
                    title: self.read_line("Enter ebook title: ")?,
                    author: self.read_line("Enter ebook author: ")?,
                    format: self.read_line("Enter file format: ")?,
                },
                Some(3) => match self.read_item_id("Enter item ID to remove: ")? {
                    Some(id) => Action::Remove(id),
                    None => continue,
                },
                Some(4) => {
                    let Some(id) = self.read_item_id("Enter item ID to borrow: ")? else {
                        continue;
                    };
                    let raw = self.read_line("Enter student ID: ")?;
                    match HolderId::parse(&raw) {
                        Ok(holder) => Action::Borrow(id, holder),
                        Err(err) => {
                            self.say(&render::lending_error(&err))?;
                            continue;
                        }
                    }
                }
                Some(5) => match self.read_item_id("Enter item ID to return: ")? {
                    Some(id) => Action::Return(id),
                    None => continue,
                },
                Some(6) => Action::ViewAll,
                Some(7) => return self.say("Logging out."),
                _ => {
                    self.say("Invalid option. Returning to staff menu.")?;
                    continue;
                }
            };

            self.execute(principal, action)?;
        }
    }

    fn patron_menu(&mut self) -> Result<(), SessionError> {
        let principal = Principal::patron();

        loop {
            self.say("")?;
            self.say("Patron Menu")?;
            self.say("1. View All Items")?;
            self.say("2. Logout")?;

            match self.read_choice("Choose an option: ")? {
                Some(1) => self.execute(&principal, Action::ViewAll)?,
                Some(2) => return self.say("Logging out."),
                _ => self.say("Invalid option. Returning to patron menu.")?,
            }
        }
    }

    fn say(&mut self, line: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print `prompt` and read one line without its line terminator.
    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::EndOfInput);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn read_choice(&mut self, prompt: &str) -> Result<Option<u32>, SessionError> {
        Ok(self.read_line(prompt)?.trim().parse().ok())
    }

    fn read_item_id(&mut self, prompt: &str) -> Result<Option<ItemId>, SessionError> {
        match self.read_line(prompt)?.parse::<ItemId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.say("Invalid number.")?;
                Ok(None)
            }
        }
    }
}
