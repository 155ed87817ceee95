use std::sync::Arc;

use franchise_core::error::CoreError;
use franchise_core::outcome::Outcome;
use franchise_core::types::DbId;
use franchise_core::validation::validate_name;
use franchise_db::models::branch::{Branch, BranchResponse, BranchSummary, CreateBranch, UpdateBranch};
use franchise_db::store::{BranchStore, FranchiseStore};

use super::{conclude, write_error, BRANCH, FRANCHISE};

pub struct BranchService {
    branches: Arc<dyn BranchStore>,
    franchises: Arc<dyn FranchiseStore>,
}

fn duplicate(franchise_id: DbId, name: &str) -> CoreError {
    CoreError::DuplicateName(format!(
        "A branch named '{name}' is already registered in franchise {franchise_id}"
    ))
}

impl BranchService {
    pub fn new(branches: Arc<dyn BranchStore>, franchises: Arc<dyn FranchiseStore>) -> Self {
        Self {
            branches,
            franchises,
        }
    }

    /// Branches of one franchise with their product counts.
    pub async fn list_by_franchise(&self, franchise_id: DbId) -> Outcome<Vec<BranchSummary>> {
        conclude(
            "branch.list_by_franchise",
            self.try_list(franchise_id).await,
            "Branch list retrieved successfully",
        )
    }

    pub async fn get(&self, id: DbId) -> Outcome<BranchResponse> {
        let result = self.find(id).await.map(|b| BranchResponse::from(&b));
        conclude("branch.get", result, "Branch retrieved successfully")
    }

    pub async fn create(&self, input: CreateBranch) -> Outcome<BranchResponse> {
        conclude(
            "branch.create",
            self.try_create(&input).await,
            "Branch created successfully",
        )
    }

    /// Rename a branch and/or move it to another franchise.
    pub async fn update(&self, id: DbId, input: UpdateBranch) -> Outcome<BranchResponse> {
        conclude(
            "branch.update",
            self.try_update(id, &input).await,
            "Branch updated successfully",
        )
    }

    pub async fn delete(&self, id: DbId) -> Outcome<BranchResponse> {
        conclude(
            "branch.delete",
            self.try_delete(id).await,
            "Branch deleted successfully",
        )
    }

    async fn find(&self, id: DbId) -> Result<Branch, CoreError> {
        self.branches
            .find_by_id(id)
            .await?
            .ok_or(CoreError::not_found(BRANCH, id))
    }

    async fn require_franchise(&self, franchise_id: DbId) -> Result<(), CoreError> {
        match self.franchises.find_by_id(franchise_id).await? {
            Some(_) => Ok(()),
            None => Err(CoreError::not_found(FRANCHISE, franchise_id)),
        }
    }

    async fn ensure_name_free(
        &self,
        franchise_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<(), CoreError> {
        if self
            .branches
            .find_by_name(franchise_id, name, exclude_id)
            .await?
            .is_some()
        {
            return Err(duplicate(franchise_id, name));
        }
        Ok(())
    }

    async fn try_list(&self, franchise_id: DbId) -> Result<Vec<BranchSummary>, CoreError> {
        self.require_franchise(franchise_id).await?;
        Ok(self.branches.list_by_franchise(franchise_id).await?)
    }

    async fn try_create(&self, input: &CreateBranch) -> Result<BranchResponse, CoreError> {
        validate_name(BRANCH, &input.name)?;
        self.require_franchise(input.franchise_id).await?;
        self.ensure_name_free(input.franchise_id, &input.name, None)
            .await?;

        let branch = self.branches.create(input).await.map_err(|e| {
            write_error(
                e,
                duplicate(input.franchise_id, &input.name),
                Some(CoreError::not_found(FRANCHISE, input.franchise_id)),
            )
        })?;
        tracing::info!(
            branch_id = branch.id,
            franchise_id = branch.franchise_id,
            name = %branch.name,
            "Branch created"
        );
        Ok(BranchResponse::from(&branch))
    }

    async fn try_update(&self, id: DbId, input: &UpdateBranch) -> Result<BranchResponse, CoreError> {
        if let Some(name) = &input.name {
            validate_name(BRANCH, name)?;
        }
        let current = self.find(id).await?;

        let franchise_id = input.franchise_id.unwrap_or(current.franchise_id);
        if franchise_id != current.franchise_id {
            self.require_franchise(franchise_id).await?;
        }
        let name = input.name.as_deref().unwrap_or(&current.name);
        self.ensure_name_free(franchise_id, name, Some(id)).await?;

        let branch = self
            .branches
            .update(id, input)
            .await
            .map_err(|e| {
                write_error(
                    e,
                    duplicate(franchise_id, name),
                    Some(CoreError::not_found(FRANCHISE, franchise_id)),
                )
            })?
            .ok_or(CoreError::not_found(BRANCH, id))?;
        tracing::info!(
            branch_id = id,
            franchise_id = branch.franchise_id,
            name = %branch.name,
            "Branch updated"
        );
        Ok(BranchResponse::from(&branch))
    }

    async fn try_delete(&self, id: DbId) -> Result<BranchResponse, CoreError> {
        let branch = self.find(id).await?;
        if !self.branches.delete(id).await? {
            return Err(CoreError::not_found(BRANCH, id));
        }
        tracing::info!(branch_id = id, "Branch deleted with its products");
        Ok(BranchResponse::from(&branch))
    }
}
