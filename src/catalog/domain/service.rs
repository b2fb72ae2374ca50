use tracing::debug;
use crate::books::domain::{Book, BookEntity};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::library::Listing;

pub(crate) struct CatalogServiceImpl {
    books: Vec<BookEntity>,
}

impl CatalogServiceImpl {
    pub(crate) fn new() -> Self {
        Self {
            books: Vec::new(),
        }
    }

    fn find_first<P>(&self, predicate: P) -> Option<BookDto>
        where P: Fn(&BookEntity) -> bool {
        self.books.iter().find(|&b| predicate(b)).map(BookDto::from)
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add(&mut self, title: &str, author: &str) -> BookDto {
        let book = BookEntity::new(title, author);
        let dto = BookDto::from(&book);
        self.books.push(book);
        debug!("catalog added {:?} by {:?}, {} books", title, author, self.books.len());
        dto
    }

    fn find_by_title(&self, title: &str) -> Option<BookDto> {
        self.find_first(|b| b.title() == title)
    }

    fn find_by_author(&self, author: &str) -> Option<BookDto> {
        self.find_first(|b| b.author() == author)
    }

    fn list_all(&self) -> Listing<BookDto> {
        Listing::from(self.books.iter().map(BookDto::from).collect::<Vec<_>>())
    }
}
