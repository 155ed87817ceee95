use std::sync::Arc;

use franchise_core::error::CoreError;
use franchise_core::outcome::Outcome;
use franchise_core::types::DbId;
use franchise_core::validation::{validate_name, validate_stock};
use franchise_db::models::product::{
    CreateProduct, Product, ProductResponse, ProductSummary, UpdateProduct,
};
use franchise_db::store::{BranchStore, ProductStore};

use super::{conclude, write_error, BRANCH, PRODUCT};

pub struct ProductService {
    products: Arc<dyn ProductStore>,
    branches: Arc<dyn BranchStore>,
}

fn duplicate(branch_id: DbId, name: &str) -> CoreError {
    CoreError::DuplicateName(format!(
        "A product named '{name}' is already registered in branch {branch_id}"
    ))
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductStore>, branches: Arc<dyn BranchStore>) -> Self {
        Self { products, branches }
    }

    pub async fn list_by_branch(&self, branch_id: DbId) -> Outcome<Vec<ProductSummary>> {
        conclude(
            "product.list_by_branch",
            self.try_list(branch_id).await,
            "Product list retrieved successfully",
        )
    }

    pub async fn get(&self, id: DbId) -> Outcome<ProductResponse> {
        let result = self.find(id).await.map(|p| ProductResponse::from(&p));
        conclude("product.get", result, "Product retrieved successfully")
    }

    pub async fn create(&self, input: CreateProduct) -> Outcome<ProductResponse> {
        conclude(
            "product.create",
            self.try_create(&input).await,
            "Product created successfully",
        )
    }

    /// Change any of name, stock and owning branch. Absent fields are kept.
    pub async fn update(&self, id: DbId, input: UpdateProduct) -> Outcome<ProductResponse> {
        conclude(
            "product.update",
            self.try_update(id, &input).await,
            "Product updated successfully",
        )
    }

    pub async fn delete(&self, id: DbId) -> Outcome<ProductResponse> {
        conclude(
            "product.delete",
            self.try_delete(id).await,
            "Product deleted successfully",
        )
    }

    async fn find(&self, id: DbId) -> Result<Product, CoreError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or(CoreError::not_found(PRODUCT, id))
    }

    async fn require_branch(&self, branch_id: DbId) -> Result<(), CoreError> {
        match self.branches.find_by_id(branch_id).await? {
            Some(_) => Ok(()),
            None => Err(CoreError::not_found(BRANCH, branch_id)),
        }
    }

    async fn ensure_name_free(
        &self,
        branch_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<(), CoreError> {
        if self
            .products
            .find_by_name(branch_id, name, exclude_id)
            .await?
            .is_some()
        {
            return Err(duplicate(branch_id, name));
        }
        Ok(())
    }

    async fn try_list(&self, branch_id: DbId) -> Result<Vec<ProductSummary>, CoreError> {
        self.require_branch(branch_id).await?;
        Ok(self.products.list_by_branch(branch_id).await?)
    }

    async fn try_create(&self, input: &CreateProduct) -> Result<ProductResponse, CoreError> {
        validate_name(PRODUCT, &input.name)?;
        validate_stock(input.stock)?;
        self.require_branch(input.branch_id).await?;
        self.ensure_name_free(input.branch_id, &input.name, None)
            .await?;

        let product = self.products.create(input).await.map_err(|e| {
            write_error(
                e,
                duplicate(input.branch_id, &input.name),
                Some(CoreError::not_found(BRANCH, input.branch_id)),
            )
        })?;
        tracing::info!(
            product_id = product.id,
            branch_id = product.branch_id,
            stock = product.stock,
            "Product created"
        );
        Ok(ProductResponse::from(&product))
    }

    async fn try_update(&self, id: DbId, input: &UpdateProduct) -> Result<ProductResponse, CoreError> {
        if let Some(name) = &input.name {
            validate_name(PRODUCT, name)?;
        }
        if let Some(stock) = input.stock {
            validate_stock(stock)?;
        }
        let current = self.find(id).await?;

        let branch_id = input.branch_id.unwrap_or(current.branch_id);
        if branch_id != current.branch_id {
            self.require_branch(branch_id).await?;
        }
        let name = input.name.as_deref().unwrap_or(&current.name);
        self.ensure_name_free(branch_id, name, Some(id)).await?;

        let product = self
            .products
            .update(id, input)
            .await
            .map_err(|e| {
                write_error(
                    e,
                    duplicate(branch_id, name),
                    Some(CoreError::not_found(BRANCH, branch_id)),
                )
            })?
            .ok_or(CoreError::not_found(PRODUCT, id))?;
        tracing::info!(
            product_id = id,
            branch_id = product.branch_id,
            stock = product.stock,
            "Product updated"
        );
        Ok(ProductResponse::from(&product))
    }

    async fn try_delete(&self, id: DbId) -> Result<ProductResponse, CoreError> {
        let product = self.find(id).await?;
        if !self.products.delete(id).await? {
            return Err(CoreError::not_found(PRODUCT, id));
        }
        tracing::info!(product_id = id, "Product deleted");
        Ok(ProductResponse::from(&product))
    }
}
