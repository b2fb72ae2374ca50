use serde::Serialize;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult, Listing};
use crate::ledger::dto::StockDto;
use crate::library::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::library::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::library::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::library::command::list_stock_cmd::{ListStockCommand, ListStockCommandRequest};
use crate::library::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::library::command::search_book_cmd::{SearchBookCommand, SearchBookCommandRequest, SearchBy};
use crate::library::domain::LibraryService;
use crate::shell::config::OutputFormat;
use crate::shell::messages::{Language, Messages};

#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub config: Configuration,
    pub language: Language,
    pub format: OutputFormat,
}

impl AppState {
    pub fn new(language: Language, format: OutputFormat) -> AppState {
        AppState {
            config: Configuration::new(),
            language,
            format,
        }
    }

    pub fn messages(&self) -> Messages {
        Messages::new(self.language)
    }
}

impl From<CommandError> for LibraryError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { term } => LibraryError::NotFound { term },
            CommandError::Serialization { message } => LibraryError::Serialization { message },
            CommandError::Validation { message } => LibraryError::Validation { message },
            CommandError::Runtime { message } => LibraryError::Runtime { message },
        }
    }
}

#[derive(Debug, Serialize)]
struct CatalogView<'a> {
    books: &'a Listing<BookDto>,
    stock: &'a Listing<StockDto>,
}

#[derive(Debug, Serialize)]
struct NotFoundView<'a> {
    not_found: &'a str,
    by: SearchBy,
}

#[derive(Debug, Serialize)]
struct RejectedView<'a> {
    invalid_choice: &'a str,
}

#[derive(Debug, Serialize)]
struct ExitView {
    exit: bool,
}

fn render<T: Serialize, F: FnOnce(&Messages) -> String>(state: &AppState, res: &T, text: F) -> LibraryResult<String> {
    match state.format {
        OutputFormat::Text => Ok(text(&state.messages())),
        OutputFormat::Json => Ok(serde_json::to_string(res)?),
    }
}

pub fn add_book(state: &AppState, svc: &mut dyn LibraryService, title: &str, author: &str) -> LibraryResult<String> {
    let res = AddBookCommand::new(svc).execute(AddBookCommandRequest::new(title, author))?;
    render(state, &res, |m| m.book_added(&res.book))
}

pub fn list_books(state: &AppState, svc: &dyn LibraryService) -> LibraryResult<String> {
    let books = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default())?.books;
    let stock = ListStockCommand::new(svc).execute(ListStockCommandRequest::default())?.stock;
    let view = CatalogView { books: &books, stock: &stock };
    render(state, &view, |m| format!("{}\n{}", m.book_list(&books), m.stock_list(&stock)))
}

pub fn search_book(state: &AppState, svc: &dyn LibraryService, by: SearchBy, term: &str) -> LibraryResult<String> {
    match SearchBookCommand::new(svc).execute(SearchBookCommandRequest::new(by, term)) {
        Ok(res) => render(state, &res, |m| m.book_info(&res.book)),
        Err(CommandError::NotFound { term }) => {
            let view = NotFoundView { not_found: term.as_str(), by };
            render(state, &view, |m| match by {
                SearchBy::Title => m.title_not_found(term.as_str()),
                SearchBy::Author => m.author_not_found(term.as_str()),
            })
        }
        Err(err) => Err(LibraryError::from(err)),
    }
}

pub fn borrow_book(state: &AppState, svc: &mut dyn LibraryService, title: &str) -> LibraryResult<String> {
    let res = BorrowBookCommand::new(svc).execute(BorrowBookCommandRequest::new(title))?;
    render(state, &res, |m| m.borrow_result(res.title.as_str(), res.status))
}

pub fn return_book(state: &AppState, svc: &mut dyn LibraryService, title: &str) -> LibraryResult<String> {
    let res = ReturnBookCommand::new(svc).execute(ReturnBookCommandRequest::new(title))?;
    render(state, &res, |m| m.return_result(res.title.as_str(), res.status))
}

pub fn invalid_choice(state: &AppState, input: &str) -> LibraryResult<String> {
    render(state, &RejectedView { invalid_choice: input }, |m| m.invalid_choice().to_string())
}

pub fn exit(state: &AppState) -> LibraryResult<String> {
    render(state, &ExitView { exit: true }, |m| m.goodbye().to_string())
}
