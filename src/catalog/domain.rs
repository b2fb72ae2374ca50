pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::Listing;

// CatalogService keeps every book ever added, in insertion order. Lookups are
// exact and case-sensitive and the first match in insertion order wins.
pub trait CatalogService: Sync + Send {
    fn add(&mut self, title: &str, author: &str) -> BookDto;
    fn find_by_title(&self, title: &str) -> Option<BookDto>;
    fn find_by_author(&self, author: &str) -> Option<BookDto>;
    fn list_all(&self) -> Listing<BookDto>;
}
