pub mod service;

use crate::books::dto::{BookDto, BookInfoDto};
use crate::core::library::{BorrowStatus, LibraryResult, Listing, ReturnStatus};
use crate::ledger::dto::StockDto;

// LibraryService is the only writer of the catalog and the stock ledger and
// keeps them in step: every catalog title has a ledger entry.
pub trait LibraryService: Sync + Send {
    fn add_book(&mut self, title: &str, author: &str) -> BookDto;
    fn list_all_books(&self) -> Listing<BookDto>;
    fn list_all_stock(&self) -> Listing<StockDto>;
    fn search_by_title(&self, title: &str) -> LibraryResult<BookInfoDto>;
    fn search_by_author(&self, author: &str) -> LibraryResult<BookInfoDto>;
    fn borrow_book(&mut self, title: &str) -> BorrowStatus;
    fn return_book(&mut self, title: &str) -> ReturnStatus;
    fn stock_of(&self, title: &str) -> Option<u32>;
}
