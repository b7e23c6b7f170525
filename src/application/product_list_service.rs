use crate::domain::errors::DomainError;
use crate::domain::ports::ProductListRepository;
use crate::domain::product::ProductView;

/// Basket and favourites operations outside of checkout.
pub struct ProductListService<R> {
    repo: R,
}

impl<R: ProductListRepository> ProductListService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add(&self, customer_id: i32, product_id: i32) -> Result<(), DomainError> {
        self.repo.add(customer_id, product_id)?;
        log::info!(
            "Product {} added to {} of customer {}",
            product_id,
            self.repo.kind().label(),
            customer_id
        );
        Ok(())
    }

    pub fn remove(&self, customer_id: i32, product_id: i32) -> Result<(), DomainError> {
        if !self.repo.remove(customer_id, product_id)? {
            return Err(DomainError::NotFound(format!(
                "Product {} not found in {} for user {}",
                product_id,
                self.repo.kind().label(),
                customer_id
            )));
        }
        log::info!(
            "Product {} removed from {} of customer {}",
            product_id,
            self.repo.kind().label(),
            customer_id
        );
        Ok(())
    }

    pub fn list(&self, customer_id: i32) -> Result<Vec<ProductView>, DomainError> {
        self.repo.list(customer_id)
    }

    pub fn clear(&self, customer_id: i32) -> Result<usize, DomainError> {
        let cleared = self.repo.clear(customer_id)?;
        log::info!(
            "Cleared {} items from {} of customer {}",
            cleared,
            self.repo.kind().label(),
            customer_id
        );
        Ok(cleared)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::product::ProductListKind;

    #[derive(Default)]
    struct InMemoryList {
        entries: Mutex<Vec<(i32, i32)>>,
    }

    impl ProductListRepository for InMemoryList {
        fn kind(&self) -> ProductListKind {
            ProductListKind::Basket
        }

        fn add(&self, customer_id: i32, product_id: i32) -> Result<(), DomainError> {
            let mut entries = self.entries.lock().unwrap();
            if !entries.contains(&(customer_id, product_id)) {
                entries.push((customer_id, product_id));
            }
            Ok(())
        }

        fn remove(&self, customer_id: i32, product_id: i32) -> Result<bool, DomainError> {
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|&e| e != (customer_id, product_id));
            Ok(entries.len() < before)
        }

        fn list(&self, _customer_id: i32) -> Result<Vec<ProductView>, DomainError> {
            Ok(Vec::new())
        }

        fn clear(&self, customer_id: i32) -> Result<usize, DomainError> {
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|&(owner, _)| owner != customer_id);
            Ok(before - entries.len())
        }
    }

    #[test]
    fn removing_an_absent_product_is_not_found() {
        let service = ProductListService::new(InMemoryList::default());

        let err = service.remove(1, 5).unwrap_err();

        assert_eq!(err.to_string(), "Product 5 not found in basket for user 1");
    }

    #[test]
    fn remove_after_add_succeeds() {
        let service = ProductListService::new(InMemoryList::default());

        service.add(1, 5).unwrap();
        service.add(1, 5).unwrap();

        assert!(service.remove(1, 5).is_ok());
        assert!(service.remove(1, 5).is_err());
    }

    #[test]
    fn clear_counts_removed_entries() {
        let service = ProductListService::new(InMemoryList::default());
        service.add(1, 5).unwrap();
        service.add(1, 6).unwrap();
        service.add(2, 5).unwrap();

        assert_eq!(service.clear(1).unwrap(), 2);
        assert_eq!(service.clear(1).unwrap(), 0);
    }
}
