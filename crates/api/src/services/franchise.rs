//! Franchise operations, including the top-stock report.

use std::sync::Arc;

use franchise_core::error::CoreError;
use franchise_core::outcome::Outcome;
use franchise_core::types::DbId;
use franchise_core::validation::validate_name;
use franchise_db::models::branch::BranchTopProduct;
use franchise_db::models::franchise::{
    CreateFranchise, Franchise, FranchiseResponse, FranchiseSummary, UpdateFranchise,
};
use franchise_db::store::FranchiseStore;

use super::{conclude, write_error, FRANCHISE};

pub struct FranchiseService {
    franchises: Arc<dyn FranchiseStore>,
}

fn duplicate(name: &str) -> CoreError {
    CoreError::DuplicateName(format!(
        "A franchise named '{name}' is already registered"
    ))
}

impl FranchiseService {
    pub fn new(franchises: Arc<dyn FranchiseStore>) -> Self {
        Self { franchises }
    }

    /// Every franchise with its branch count.
    pub async fn list(&self) -> Outcome<Vec<FranchiseSummary>> {
        let result = self
            .franchises
            .list_summaries()
            .await
            .map_err(CoreError::from);
        conclude("franchise.list", result, "Franchise list retrieved successfully")
    }

    pub async fn get(&self, id: DbId) -> Outcome<FranchiseResponse> {
        let result = self.find(id).await.map(|f| FranchiseResponse::from(&f));
        conclude("franchise.get", result, "Franchise retrieved successfully")
    }

    pub async fn create(&self, input: CreateFranchise) -> Outcome<FranchiseResponse> {
        conclude(
            "franchise.create",
            self.try_create(&input).await,
            "Franchise created successfully",
        )
    }

    pub async fn update(&self, id: DbId, input: UpdateFranchise) -> Outcome<FranchiseResponse> {
        conclude(
            "franchise.update",
            self.try_update(id, &input).await,
            "Franchise updated successfully",
        )
    }

    /// Delete a franchise together with its branches and their products.
    pub async fn delete(&self, id: DbId) -> Outcome<FranchiseResponse> {
        conclude(
            "franchise.delete",
            self.try_delete(id).await,
            "Franchise deleted successfully",
        )
    }

    /// For each branch of the franchise, its highest-stock product.
    pub async fn top_stock_report(&self, id: DbId) -> Outcome<Vec<BranchTopProduct>> {
        conclude(
            "franchise.top_stock_report",
            self.try_top_stock_report(id).await,
            "Top-stock product per branch retrieved successfully",
        )
    }

    async fn find(&self, id: DbId) -> Result<Franchise, CoreError> {
        self.franchises
            .find_by_id(id)
            .await?
            .ok_or(CoreError::not_found(FRANCHISE, id))
    }

    async fn ensure_name_free(&self, name: &str, exclude_id: Option<DbId>) -> Result<(), CoreError> {
        if self.franchises.find_by_name(name, exclude_id).await?.is_some() {
            return Err(duplicate(name));
        }
        Ok(())
    }

    async fn try_create(&self, input: &CreateFranchise) -> Result<FranchiseResponse, CoreError> {
        validate_name(FRANCHISE, &input.name)?;
        self.ensure_name_free(&input.name, None).await?;

        let franchise = self
            .franchises
            .create(input)
            .await
            .map_err(|e| write_error(e, duplicate(&input.name), None))?;
        tracing::info!(franchise_id = franchise.id, name = %franchise.name, "Franchise created");
        Ok(FranchiseResponse::from(&franchise))
    }

    async fn try_update(
        &self,
        id: DbId,
        input: &UpdateFranchise,
    ) -> Result<FranchiseResponse, CoreError> {
        validate_name(FRANCHISE, &input.name)?;
        self.find(id).await?;
        self.ensure_name_free(&input.name, Some(id)).await?;

        let franchise = self
            .franchises
            .update(id, input)
            .await
            .map_err(|e| write_error(e, duplicate(&input.name), None))?
            .ok_or(CoreError::not_found(FRANCHISE, id))?;
        tracing::info!(franchise_id = id, name = %franchise.name, "Franchise updated");
        Ok(FranchiseResponse::from(&franchise))
    }

    async fn try_delete(&self, id: DbId) -> Result<FranchiseResponse, CoreError> {
        let franchise = self.find(id).await?;
        if !self.franchises.delete(id).await? {
            return Err(CoreError::not_found(FRANCHISE, id));
        }
        tracing::info!(franchise_id = id, "Franchise deleted with its branches and products");
        Ok(FranchiseResponse::from(&franchise))
    }

    async fn try_top_stock_report(&self, id: DbId) -> Result<Vec<BranchTopProduct>, CoreError> {
        self.find(id).await?;
        Ok(self.franchises.top_stock_per_branch(id).await?)
    }
}
