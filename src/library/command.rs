pub mod add_book_cmd;
pub mod borrow_book_cmd;
pub mod list_books_cmd;
pub mod list_stock_cmd;
pub mod return_book_cmd;
pub mod search_book_cmd;
