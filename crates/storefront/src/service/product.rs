use crate::{
    abstract_trait::product::{DynProductRepository, ProductServiceTrait},
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::product::ProductResponse,
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductService {
    repository: DynProductRepository,
}

impl ProductService {
    pub fn new(repository: DynProductRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.repository.find_all().await.map_err(|err| {
            error!("❌ Failed to list products: {:?}", err);
            ServiceError::from(err)
        })?;

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        let product = self.repository.find_by_id(id).await.map_err(|err| {
            error!("❌ Failed to fetch product {}: {:?}", id, err);
            ServiceError::from(err)
        })?;

        product
            .map(ProductResponse::from)
            .ok_or_else(|| ServiceError::NotFound("Product not found.".into()))
    }

    async fn create(&self, req: &CreateProductRequest) -> Result<i32, ServiceError> {
        let id = self.repository.create(req).await.map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", req.name, err);
            ServiceError::from(err)
        })?;

        info!("✅ Product created: id={} name={}", id, req.name);
        Ok(id)
    }

    async fn update(&self, id: i32, req: &UpdateProductRequest) -> Result<(), ServiceError> {
        let affected = self.repository.update(id, req).await.map_err(|err| {
            error!("❌ Failed to update product {}: {:?}", id, err);
            ServiceError::from(err)
        })?;

        if affected == 0 {
            return Err(ServiceError::NotFound("Product not found.".into()));
        }

        info!("✅ Product updated: id={}", id);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let affected = self.repository.delete(id).await.map_err(|err| {
            error!("❌ Failed to delete product {}: {:?}", id, err);
            ServiceError::from(err)
        })?;

        if affected == 0 {
            return Err(ServiceError::NotFound("Product not found.".into()));
        }

        info!("✅ Product deleted: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::product::MockProductRepositoryTrait;
    use std::sync::Arc;

    #[tokio::test]
    async fn missing_product_maps_to_not_found() {
        let mut repository = MockProductRepositoryTrait::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let service = ProductService::new(Arc::new(repository));

        match service.find_by_id(42).await {
            Err(ServiceError::NotFound(msg)) => assert_eq!(msg, "Product not found."),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_with_zero_affected_rows_is_not_found() {
        let mut repository = MockProductRepositoryTrait::new();
        repository.expect_update().returning(|_, _| Ok(0));

        let service = ProductService::new(Arc::new(repository));
        let req = UpdateProductRequest {
            name: "Keyboard".into(),
            price: 49.9,
            image_url: "https://example.com/kb.png".into(),
            user_id: None,
        };

        match service.update(42, &req).await {
            Err(ServiceError::NotFound(_)) => {}
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
