//! Interactive menu driving a [`Library`] over any line-based input.

use std::{
    io::{self, BufRead, Write},
    ops::ControlFlow,
    str::FromStr,
};

use colored::Colorize;

use crate::{error::LendingError, library::Library, report::LibraryReport};

/// Menu text shown before every choice
const MENU: &str = "\
1. List all items
2. Search for items by author
3. List all borrowers
4. Check out an item
5. Return an item
6. View items checked out by a borrower
7. Add a new item
8. Register a new borrower
9. Exit
10. Show recent activity
11. Show library snapshot (JSON)";

/// Outcome of one menu action
type Step = io::Result<ControlFlow<()>>;

/// Turn a refused lending operation into a message for the user
#[must_use]
pub fn describe_error(err: &LendingError) -> String {
    match err {
        LendingError::BorrowerNotFound { .. } => {
            "Borrower not found. Please register the borrower first.".to_string()
        }
        LendingError::ItemNotFound { .. } => "Item not found.".to_string(),
        LendingError::AlreadyCheckedOut { title } => {
            format!("Sorry, '{title}' is already checked out.")
        }
        LendingError::NotHeldByThisBorrower { .. } => {
            "This item was not checked out to this borrower.".to_string()
        }
    }
}

/// Sequential command loop: prompts on `output`, reads answers from `input`.
#[derive(Debug)]
pub struct Shell<R, W> {
    /// Library being operated on
    library: Library,
    /// Source of user answers, one per line
    input: R,
    /// Destination for prompts and results
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over the given library and streams
    #[must_use]
    pub fn new(library: Library, input: R, output: W) -> Self {
        Self { library, input, output }
    }

    /// Give back the library and the output stream
    #[must_use]
    pub fn into_parts(self) -> (Library, W) {
        (self.library, self.output)
    }

    /// Run the menu until the user exits or input ends
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading input or writing output.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{}", "--- Library Lending Desk Menu ---".bold())?;
            writeln!(self.output, "{MENU}")?;

            let Some(choice) = self.read_number::<u32>("Enter your choice: ")? else {
                break;
            };
            let flow = match choice {
                1 => self.list_items(),
                2 => self.search_by_author(),
                3 => self.list_borrowers(),
                4 => self.check_out(),
                5 => self.return_item(),
                6 => self.list_holdings(),
                7 => self.add_item(),
                8 => self.register_borrower(),
                9 => {
                    writeln!(self.output, "Exiting program. Goodbye!")?;
                    Ok(ControlFlow::Break(()))
                }
                10 => self.show_history(),
                11 => self.show_snapshot(),
                _ => {
                    writeln!(self.output, "{}", "Invalid choice. Please try again.".yellow())?;
                    Ok(ControlFlow::Continue(()))
                }
            }?;
            if flow.is_break() {
                break;
            }
        }
        tracing::debug!("shell session ended");
        Ok(())
    }

    /// Print `text` and read one trimmed line; `None` once input is exhausted
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until the answer parses as a number; `None` once input is exhausted
    fn read_number<T: FromStr>(&mut self, text: &str) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(text)? else {
                return Ok(None);
            };
            if let Ok(number) = answer.parse() {
                return Ok(Some(number));
            }
            writeln!(self.output, "{}", "Invalid input. Please enter a number.".yellow())?;
        }
    }

    /// Report a finished lending operation
    fn report_outcome(&mut self, message: Result<String, LendingError>) -> Step {
        match message {
            Ok(text) => writeln!(self.output, "{}", text.green())?,
            Err(err) => writeln!(self.output, "{}", describe_error(&err).red())?,
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Menu 1
    fn list_items(&mut self) -> Step {
        let query = self.library.query();
        let items: Vec<_> = query.items().iter().collect();
        let listing = LibraryReport::item_list(&items, "The library has no items.");
        if !items.is_empty() {
            writeln!(self.output, "\n{}", "--- Current Library Collection ---".bold())?;
        }
        write!(self.output, "{listing}")?;
        Ok(ControlFlow::Continue(()))
    }

    /// Menu 2
    fn search_by_author(&mut self) -> Step {
        let Some(author) = self.prompt("Enter the author's name: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let items = self.library.query().items_by_author(&author);
        writeln!(self.output, "Searching for items by: {author}")?;
        let listing = LibraryReport::item_list(&items, "No items found by that author.");
        write!(self.output, "{listing}")?;
        Ok(ControlFlow::Continue(()))
    }

    /// Menu 3
    fn list_borrowers(&mut self) -> Step {
        let borrowers = self.library.query().borrowers();
        if !borrowers.is_empty() {
            writeln!(self.output, "\n{}", "--- Registered Borrowers ---".bold())?;
        }
        write!(self.output, "{}", LibraryReport::borrower_list(borrowers))?;
        Ok(ControlFlow::Continue(()))
    }

    /// Menu 4
    fn check_out(&mut self) -> Step {
        let Some(borrower_id) = self.prompt("Enter borrower ID: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(title) = self.prompt("Enter the title of the item to check out: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let outcome = self.library.check_out(&borrower_id, &title).map(|event| {
            format!("Successfully checked out '{}' to {}.", event.title(), event.borrower_name())
        });
        self.report_outcome(outcome)
    }

    /// Menu 5
    fn return_item(&mut self) -> Step {
        let Some(borrower_id) = self.prompt("Enter borrower ID: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(title) = self.prompt("Enter the title of the item to return: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let outcome = self.library.return_item(&borrower_id, &title).map(|event| {
            format!("Successfully returned '{}' from {}.", event.title(), event.borrower_name())
        });
        self.report_outcome(outcome)
    }

    /// Menu 6
    fn list_holdings(&mut self) -> Step {
        let Some(borrower_id) = self.prompt("Enter borrower ID: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        match self.library.query().holdings_of(&borrower_id) {
            Ok(borrower) => {
                let heading = format!("--- Items checked out by {} ---", borrower.name());
                writeln!(self.output, "\n{}", heading.bold())?;
                write!(self.output, "{}", LibraryReport::holdings(borrower))?;
            }
            Err(err) => writeln!(self.output, "{}", describe_error(&err).red())?,
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Menu 7
    fn add_item(&mut self) -> Step {
        let Some(title) = self.prompt("Enter item title: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(author) = self.prompt("Enter author's name: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(year) = self.read_number::<i32>("Enter publication year: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        self.library.add_item(&title, &author, year);
        writeln!(self.output, "{}", format!("Item added successfully: {title}").green())?;
        Ok(ControlFlow::Continue(()))
    }

    /// Menu 8
    fn register_borrower(&mut self) -> Step {
        let Some(name) = self.prompt("Enter borrower name: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(id) = self.prompt("Enter borrower ID: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        self.library.register_borrower(&name, &id);
        writeln!(self.output, "{}", format!("Borrower registered successfully: {name}").green())?;
        Ok(ControlFlow::Continue(()))
    }

    /// Menu 10
    fn show_history(&mut self) -> Step {
        if self.library.history().is_empty() {
            writeln!(self.output, "No activity yet.")?;
            return Ok(ControlFlow::Continue(()));
        }
        writeln!(self.output, "\n{}", "--- Recent Activity ---".bold())?;
        for (number, event) in (1_u32..).zip(self.library.history().iter()) {
            writeln!(self.output, "{number}. {event}")?;
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Menu 11
    fn show_snapshot(&mut self) -> Step {
        let json =
            serde_json::to_string_pretty(&self.library.snapshot()).map_err(io::Error::other)?;
        writeln!(self.output, "{json}")?;
        Ok(ControlFlow::Continue(()))
    }
}
