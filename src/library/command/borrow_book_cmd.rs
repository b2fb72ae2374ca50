use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::core::library::BorrowStatus;
use crate::library::domain::LibraryService;

pub struct BorrowBookCommand<'a> {
    library_service: &'a mut dyn LibraryService,
}

impl<'a> BorrowBookCommand<'a> {
    pub fn new(library_service: &'a mut dyn LibraryService) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug)]
pub struct BorrowBookCommandRequest {
    pub title: String,
}

impl BorrowBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub title: String,
    pub status: BorrowStatus,
    pub remaining: Option<u32>,
}

impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand<'_> {
    fn execute(&mut self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        let status = self.library_service.borrow_book(req.title.as_str());
        let remaining = self.library_service.stock_of(req.title.as_str());
        Ok(BorrowBookCommandResponse { title: req.title, status, remaining })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::BorrowStatus;
    use crate::library::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
    use crate::library::factory;

    #[tokio::test]
    async fn test_should_run_borrow_book() {
        let mut svc = factory::create_library_service(&Configuration::new());
        let res = BorrowBookCommand::new(svc.as_mut())
            .execute(BorrowBookCommandRequest::new("Dune")).expect("should run borrow");
        assert_eq!(BorrowStatus::UnknownTitle, res.status);
        assert_eq!(None, res.remaining);

        svc.add_book("Dune", "Herbert");
        let res = BorrowBookCommand::new(svc.as_mut())
            .execute(BorrowBookCommandRequest::new("Dune")).expect("should run borrow");
        assert_eq!(BorrowStatus::Borrowed, res.status);
        assert_eq!(Some(2), res.remaining);
    }
}
