use std::boxed::Box;
use std::result::Result as DefaultResult;
use std::sync::Arc;

use crate::api::dto::ProductDto;
use crate::error::AppError;
use crate::logging::{app_log_event, AppLogContext, AppLogLevel};
use crate::model::ProductModel;
use crate::repository::AbsProductRepo;

pub struct EditProductUseCase {}

impl EditProductUseCase {
    pub async fn execute(
        repo: Box<dyn AbsProductRepo>,
        product_id: u64,
        data: ProductDto,
        logctx: Arc<AppLogContext>,
    ) -> DefaultResult<ProductDto, AppError> {
        // malformed input is always reported first, the check runs even
        // when no product is saved with the given identifier
        let result = match ProductModel::validate(&data) {
            Ok(()) => Self::_overwrite_saved(repo, product_id, data).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            app_log_event!(
                logctx,
                AppLogLevel::ERROR,
                "product_id:{}, detail:{}",
                product_id,
                e
            );
        }
        result
    } // end of fn execute

    async fn _overwrite_saved(
        repo: Box<dyn AbsProductRepo>,
        product_id: u64,
        data: ProductDto,
    ) -> DefaultResult<ProductDto, AppError> {
        let saved = repo.fetch_one(product_id).await?;
        let updated = saved.update(data)?;
        let persisted = repo.save(updated).await?;
        Ok(ProductDto::from(persisted))
    }
} // end of impl EditProductUseCase
