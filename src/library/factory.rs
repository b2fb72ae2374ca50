use crate::catalog::factory::create_catalog_service;
use crate::core::domain::Configuration;
use crate::ledger::factory::create_ledger_service;
use crate::library::domain::LibraryService;
use crate::library::domain::service::LibraryServiceImpl;

pub fn create_library_service(config: &Configuration) -> Box<dyn LibraryService> {
    let catalog_svc = create_catalog_service();
    let ledger_svc = create_ledger_service(config);
    Box::new(LibraryServiceImpl::new(catalog_svc, ledger_svc))
}
