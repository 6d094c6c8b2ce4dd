use crate::server::service::catalog::CatalogService;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

impl From<CatalogService> for AppState {
    fn from(catalog: CatalogService) -> Self {
        Self { catalog }
    }
}
