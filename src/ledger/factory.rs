use crate::core::domain::Configuration;
use crate::ledger::domain::LedgerService;
use crate::ledger::domain::service::LedgerServiceImpl;

pub fn create_ledger_service(config: &Configuration) -> Box<dyn LedgerService> {
    Box::new(LedgerServiceImpl::new(config))
}
