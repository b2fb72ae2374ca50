use serde::Serialize;
use crate::books::domain::{Book, BookEntity};

// BookDto is a data transfer object for the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
}

impl BookDto {
    pub fn new(title: &str, author: &str) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        BookDto::new(other.title(), other.author())
    }
}

// BookInfoDto is what a search hit looks like: the book joined with the stock
// recorded under its title. A `None` stock means the ledger has no entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookInfoDto {
    pub title: String,
    pub author: String,
    pub stock: Option<u32>,
}

impl BookInfoDto {
    pub fn from_book(book: &dyn Book, stock: Option<u32>) -> Self {
        BookInfoDto {
            title: book.title().to_string(),
            author: book.author().to_string(),
            stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::BookEntity;
    use crate::books::dto::{BookDto, BookInfoDto};

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("Dune", "Herbert");
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Herbert", book.author.as_str());
    }

    #[tokio::test]
    async fn test_should_convert_entity() {
        let entity = BookEntity::new("Emma", "Austen");
        assert_eq!(BookDto::new("Emma", "Austen"), BookDto::from(&entity));
    }

    #[tokio::test]
    async fn test_should_build_book_info() {
        let info = BookInfoDto::from_book(&BookDto::new("Dune", "Herbert"), Some(2));
        assert_eq!("Dune", info.title.as_str());
        assert_eq!("Herbert", info.author.as_str());
        assert_eq!(Some(2), info.stock);
    }
}
