use tracing::debug;
use crate::books::dto::{BookDto, BookInfoDto};
use crate::catalog::domain::CatalogService;
use crate::core::library::{BorrowStatus, LibraryError, LibraryResult, Listing, ReturnStatus};
use crate::ledger::domain::LedgerService;
use crate::ledger::dto::StockDto;
use crate::library::domain::LibraryService;

pub(crate) struct LibraryServiceImpl {
    catalog_service: Box<dyn CatalogService>,
    ledger_service: Box<dyn LedgerService>,
}

impl LibraryServiceImpl {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>,
                      ledger_service: Box<dyn LedgerService>) -> Self {
        Self {
            catalog_service,
            ledger_service,
        }
    }

    // Stock is looked up by the found book's title, not by the search term.
    fn book_info(&self, found: Option<BookDto>, term: &str) -> LibraryResult<BookInfoDto> {
        match found {
            Some(book) => {
                let stock = self.ledger_service.query(book.title.as_str());
                Ok(BookInfoDto::from_book(&book, stock))
            }
            None => {
                debug!("no book found for {:?}", term);
                Err(LibraryError::not_found(term))
            }
        }
    }
}

impl LibraryService for LibraryServiceImpl {
    fn add_book(&mut self, title: &str, author: &str) -> BookDto {
        let book = self.catalog_service.add(title, author);
        self.ledger_service.initialize(title);
        book
    }

    fn list_all_books(&self) -> Listing<BookDto> {
        self.catalog_service.list_all()
    }

    fn list_all_stock(&self) -> Listing<StockDto> {
        self.ledger_service.list_all()
    }

    fn search_by_title(&self, title: &str) -> LibraryResult<BookInfoDto> {
        self.book_info(self.catalog_service.find_by_title(title), title)
    }

    fn search_by_author(&self, author: &str) -> LibraryResult<BookInfoDto> {
        self.book_info(self.catalog_service.find_by_author(author), author)
    }

    fn borrow_book(&mut self, title: &str) -> BorrowStatus {
        self.ledger_service.borrow(title)
    }

    fn return_book(&mut self, title: &str) -> ReturnStatus {
        self.ledger_service.return_copy(title)
    }

    fn stock_of(&self, title: &str) -> Option<u32> {
        self.ledger_service.query(title)
    }
}
