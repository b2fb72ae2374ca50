use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;

pub fn create_catalog_service() -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new())
}
