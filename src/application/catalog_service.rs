use crate::domain::errors::DomainError;
use crate::domain::ports::CatalogRepository;
use crate::domain::product::ProductView;

pub struct CatalogService<R> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_products(&self) -> Result<Vec<ProductView>, DomainError> {
        self.repo.list()
    }

    pub fn get_product(&self, id: i32) -> Result<ProductView, DomainError> {
        self.repo
            .find_by_id(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Product with ID {} not found", id)))
    }

    /// An empty category is reported as not found.
    pub fn products_by_category(&self, category_id: i32) -> Result<Vec<ProductView>, DomainError> {
        let products = self.repo.list_by_category(category_id)?;
        if products.is_empty() {
            return Err(DomainError::NotFound(format!(
                "No products found in category {}",
                category_id
            )));
        }
        Ok(products)
    }
}
