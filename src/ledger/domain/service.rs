use std::collections::HashMap;
use tracing::{debug, info};
use crate::core::domain::Configuration;
use crate::core::library::{BorrowStatus, LibraryError, LibraryResult, Listing, ReturnStatus};
use crate::ledger::domain::LedgerService;
use crate::ledger::dto::StockDto;

pub(crate) struct LedgerServiceImpl {
    stock: HashMap<String, u32>,
    max_stock: u32,
    default_stock: u32,
}

impl LedgerServiceImpl {
    pub(crate) fn new(config: &Configuration) -> Self {
        Self {
            stock: HashMap::new(),
            max_stock: config.max_stock,
            default_stock: config.default_stock,
        }
    }

    fn set(&mut self, title: &str, quantity: u32) {
        let previous = self.stock.insert(title.to_string(), quantity);
        debug!("stock for {:?} set to {} (was {:?})", title, quantity, previous);
    }
}

impl LedgerService for LedgerServiceImpl {
    fn initialize(&mut self, title: &str) {
        self.set(title, self.default_stock);
    }

    fn initialize_with(&mut self, title: &str, quantity: u32) -> LibraryResult<()> {
        if quantity > self.max_stock {
            return Err(LibraryError::validation(
                format!("quantity {} for {:?} exceeds max stock {}", quantity, title, self.max_stock).as_str()));
        }
        self.set(title, quantity);
        Ok(())
    }

    fn query(&self, title: &str) -> Option<u32> {
        self.stock.get(title).copied()
    }

    fn borrow(&mut self, title: &str) -> BorrowStatus {
        let status = match self.stock.get_mut(title) {
            None => BorrowStatus::UnknownTitle,
            Some(0) => BorrowStatus::OutOfStock,
            Some(count) => {
                *count -= 1;
                BorrowStatus::Borrowed
            }
        };
        info!("borrow {:?}: {}", title, status);
        status
    }

    fn return_copy(&mut self, title: &str) -> ReturnStatus {
        let max_stock = self.max_stock;
        let status = match self.stock.get_mut(title) {
            None => ReturnStatus::UnknownTitle,
            Some(count) if *count >= max_stock => ReturnStatus::AtCapacity,
            Some(count) => {
                *count += 1;
                ReturnStatus::Returned
            }
        };
        info!("return {:?}: {}", title, status);
        status
    }

    fn list_all(&self) -> Listing<StockDto> {
        let mut records: Vec<StockDto> = self.stock.iter()
            .map(|(title, count)| StockDto::new(title, *count))
            .collect();
        records.sort_by(|a, b| a.title.cmp(&b.title));
        Listing::from(records)
    }
}
