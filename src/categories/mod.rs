use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    access::{require_principal, Authorizer, PageRequest, Result},
    entities::categories,
    store::{CreateCategoryParams, DynStore, UpdateCategoryParams},
    validations,
};

use models::*;

pub mod models;
pub mod routes;


pub type DynCategoryService = Arc<dyn CategoryService + Send + Sync>;

///
/// Categories are either owned by one user or global. Global ones are
/// visible to everybody and are never modified through this service.
///
#[async_trait]
pub trait CategoryService {
    async fn create_cat(&self, principal: &str, cat: CreateCategoryModel) -> Result<GetCategoryModel>;
    async fn get_cat(&self, principal: &str, cat_id: i64) -> Result<GetCategoryModel>;
    async fn get_cats(&self, principal: &str, page: PageRequest) -> Result<Vec<GetCategoryModel>>;
    async fn update_cat(&self, principal: &str, cat_id: i64, cat: UpdateCategoryModel) -> Result<GetCategoryModel>;
    async fn delete_cat(&self, principal: &str, cat_id: i64) -> Result<()>;
}

pub struct StoreCategoryService {
    authz: Authorizer,
    store: DynStore,
}

impl StoreCategoryService {
    pub fn new_dyn(authz: Authorizer, store: DynStore) -> DynCategoryService {
        Arc::new(StoreCategoryService { authz, store })
    }
}

#[async_trait]
impl CategoryService for StoreCategoryService {
    async fn create_cat(&self, principal: &str, cat: CreateCategoryModel) -> Result<GetCategoryModel> {
        require_principal(principal)?;
        validations::no_client_owner(&cat.owner)?;
        // Remove whitespacing from the cat name
        let fmt_cat_name = validations::name("name", &cat.name)?;

        let cat = self.store.create_category(CreateCategoryParams {
            name: fmt_cat_name,
            owner: Some(principal.to_string()),
        }).await?;
        Ok(cat.into())
    }

    async fn get_cat(&self, principal: &str, cat_id: i64) -> Result<GetCategoryModel> {
        let cat = self.authz.fetch::<categories::Model>(principal, cat_id).await?;
        Ok(cat.into())
    }

    async fn get_cats(&self, principal: &str, page: PageRequest) -> Result<Vec<GetCategoryModel>> {
        let page = self.authz.paginate(principal, &page)?;
        let cats = self.store.list_categories(principal, page).await?;
        Ok(cats.into_iter().map(Into::into).collect())
    }

    async fn update_cat(&self, principal: &str, cat_id: i64, cat: UpdateCategoryModel) -> Result<GetCategoryModel> {
        validations::no_client_owner(&cat.owner)?;
        let fmt_cat_name = validations::name("name", &cat.name)?;

        let ex_cat = self.authz.fetch_owned::<categories::Model>(principal, cat_id).await?;
        let updated = self.store.update_category(UpdateCategoryParams {
            id: ex_cat.id,
            name: fmt_cat_name,
        }).await?;
        Ok(updated.into())
    }

    async fn delete_cat(&self, principal: &str, cat_id: i64) -> Result<()> {
        self.authz.delete::<categories::Model>(principal, cat_id).await
    }
}
