use serde::Serialize;
use crate::books::dto::BookInfoDto;
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub struct SearchBookCommand<'a> {
    library_service: &'a dyn LibraryService,
}

impl<'a> SearchBookCommand<'a> {
    pub fn new(library_service: &'a dyn LibraryService) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub enum SearchBy {
    Title,
    Author,
}

#[derive(Debug)]
pub struct SearchBookCommandRequest {
    pub by: SearchBy,
    pub term: String,
}

impl SearchBookCommandRequest {
    pub fn new(by: SearchBy, term: &str) -> Self {
        Self {
            by,
            term: term.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBookCommandResponse {
    pub book: BookInfoDto,
}

impl Command<SearchBookCommandRequest, SearchBookCommandResponse> for SearchBookCommand<'_> {
    fn execute(&mut self, req: SearchBookCommandRequest) -> Result<SearchBookCommandResponse, CommandError> {
        let res = match req.by {
            SearchBy::Title => self.library_service.search_by_title(req.term.as_str()),
            SearchBy::Author => self.library_service.search_by_author(req.term.as_str()),
        };
        res.map_err(CommandError::from).map(|book| SearchBookCommandResponse { book })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::library::command::search_book_cmd::{SearchBookCommand, SearchBookCommandRequest, SearchBy};
    use crate::library::factory;

    #[tokio::test]
    async fn test_should_run_search_book() {
        let mut svc = factory::create_library_service(&Configuration::new());
        svc.add_book("Dune", "Herbert");

        let res = SearchBookCommand::new(svc.as_ref())
            .execute(SearchBookCommandRequest::new(SearchBy::Title, "Dune")).expect("should find by title");
        assert_eq!("Herbert", res.book.author.as_str());
        assert_eq!(Some(3), res.book.stock);

        let res = SearchBookCommand::new(svc.as_ref())
            .execute(SearchBookCommandRequest::new(SearchBy::Author, "Herbert")).expect("should find by author");
        assert_eq!("Dune", res.book.title.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_search_for_missing_book() {
        let svc = factory::create_library_service(&Configuration::new());
        let res = SearchBookCommand::new(svc.as_ref())
            .execute(SearchBookCommandRequest::new(SearchBy::Title, "Missing"));
        assert_eq!(Some(CommandError::NotFound { term: "Missing".to_string() }), res.err());
    }
}
