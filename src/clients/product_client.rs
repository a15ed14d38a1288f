use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::product_actor::ProductError;

/// Client for the catalog store.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        let products = self.inner.list().await?;
        debug!(product_count = products.len(), "Listed products");
        Ok(products)
    }

    /// Stores a new product under a freshly generated id, ahead of existing ones.
    #[instrument(skip(self, data), fields(product_name = %data.name))]
    pub async fn create_product(&self, data: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        let product = self.inner.create(data).await?;
        info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: &str, patch: ProductPatch) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id.to_string(), patch).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::{FrameworkError, ResourceActor};
    use crate::domain::UnitOfMeasure;

    fn start() -> ProductClient {
        let (actor, inner) = ResourceActor::<Product>::new("products", 8, crate::app_system::short_id);
        tokio::spawn(actor.run());
        ProductClient::new(inner)
    }

    fn strawberries() -> ProductCreate {
        ProductCreate {
            name: "Fresas de Huelva".into(),
            description: "Dulces y jugosas".into(),
            price: 4.5,
            unit: UnitOfMeasure::Weight,
            stock: 50.0,
            image_url: "https://picsum.photos/seed/strawberry/400/300".into(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_input_with_id() {
        let client = start();
        let created = client.create_product(strawberries()).await.unwrap();
        assert!(!created.id.is_empty());

        let fetched = client.get_product(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, Product::from_parts(created.id.clone(), strawberries()));
    }

    #[tokio::test]
    async fn test_update_merges_and_missing_id_leaves_catalog_alone() {
        let client = start();
        let created = client.create_product(strawberries()).await.unwrap();

        let patch = ProductPatch { price: Some(3.9), stock: Some(12.5), ..Default::default() };
        let updated = client.update_product(&created.id, patch.clone()).await.unwrap();
        assert_eq!(updated.price, 3.9);
        assert_eq!(updated.stock, 12.5);
        assert_eq!(updated.name, created.name);

        let before = client.list_products().await.unwrap();
        let err = client.update_product("missing", patch).await.unwrap_err();
        assert_eq!(err, ProductError::NotFound("missing".into()));
        assert_eq!(client.list_products().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let client = start();
        let first = client.create_product(strawberries()).await.unwrap();
        client.create_product(strawberries()).await.unwrap();

        assert!(matches!(client.delete_product("missing").await, Err(ProductError::NotFound(_))));
        assert_eq!(client.list_products().await.unwrap().len(), 2);

        client.delete_product(&first.id).await.unwrap();
        assert_eq!(client.list_products().await.unwrap().len(), 1);
        assert_eq!(client.get_product(&first.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_products_have_no_actions() {
        let client = start();
        let created = client.create_product(strawberries()).await.unwrap();

        let err = client.inner.perform_action(created.id.clone(), ()).await.unwrap_err();
        assert_eq!(err, FrameworkError::Rejected("products have no actions".into()));
        let stored = client.get_product(&created.id).await.unwrap();
        assert_eq!(stored, Some(created));
    }
}
