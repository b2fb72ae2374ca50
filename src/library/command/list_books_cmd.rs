use serde::Serialize;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::core::library::Listing;
use crate::library::domain::LibraryService;

pub struct ListBooksCommand<'a> {
    library_service: &'a dyn LibraryService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(library_service: &'a dyn LibraryService) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Listing<BookDto>,
}

impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'_> {
    fn execute(&mut self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        Ok(ListBooksCommandResponse { books: self.library_service.list_all_books() })
    }
}
