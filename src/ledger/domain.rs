pub mod service;

use crate::core::library::{BorrowStatus, LibraryResult, Listing, ReturnStatus};
use crate::ledger::dto::StockDto;

// LedgerService maps a title to its remaining copies. Every entry stays within
// `[0, max_stock]`; a title with no entry is unknown to the library, which is
// not the same as a known title with zero copies left.
pub trait LedgerService: Sync + Send {
    // Sets the entry to the configured default quantity, replacing any existing count.
    fn initialize(&mut self, title: &str);
    // Same as `initialize` with an explicit quantity, rejected above the stock ceiling.
    fn initialize_with(&mut self, title: &str, quantity: u32) -> LibraryResult<()>;
    fn query(&self, title: &str) -> Option<u32>;
    fn borrow(&mut self, title: &str) -> BorrowStatus;
    fn return_copy(&mut self, title: &str) -> ReturnStatus;
    fn list_all(&self) -> Listing<StockDto>;
}
