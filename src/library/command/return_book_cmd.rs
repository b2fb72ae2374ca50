use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::core::library::ReturnStatus;
use crate::library::domain::LibraryService;

pub struct ReturnBookCommand<'a> {
    library_service: &'a mut dyn LibraryService,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(library_service: &'a mut dyn LibraryService) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug)]
pub struct ReturnBookCommandRequest {
    pub title: String,
}

impl ReturnBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub title: String,
    pub status: ReturnStatus,
    pub remaining: Option<u32>,
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'_> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let status = self.library_service.return_book(req.title.as_str());
        let remaining = self.library_service.stock_of(req.title.as_str());
        Ok(ReturnBookCommandResponse { title: req.title, status, remaining })
    }
}
