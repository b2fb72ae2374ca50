use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::core::library::Listing;
use crate::ledger::dto::StockDto;
use crate::library::domain::LibraryService;

pub struct ListStockCommand<'a> {
    library_service: &'a dyn LibraryService,
}

impl<'a> ListStockCommand<'a> {
    pub fn new(library_service: &'a dyn LibraryService) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListStockCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListStockCommandResponse {
    pub stock: Listing<StockDto>,
}

impl Command<ListStockCommandRequest, ListStockCommandResponse> for ListStockCommand<'_> {
    fn execute(&mut self, _req: ListStockCommandRequest) -> Result<ListStockCommandResponse, CommandError> {
        Ok(ListStockCommandResponse { stock: self.library_service.list_all_stock() })
    }
}
