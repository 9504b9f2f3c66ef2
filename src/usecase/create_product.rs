use std::boxed::Box;
use std::result::Result as DefaultResult;
use std::sync::Arc;

use crate::api::dto::ProductDto;
use crate::error::AppError;
use crate::logging::{app_log_event, AppLogContext, AppLogLevel};
use crate::model::ProductModel;
use crate::repository::AbsProductRepo;

pub struct CreateProductUseCase {}

impl CreateProductUseCase {
    pub async fn execute(
        repo: Box<dyn AbsProductRepo>,
        data: ProductDto,
        logctx: Arc<AppLogContext>,
    ) -> DefaultResult<ProductDto, AppError> {
        let result = match ProductModel::validate(&data) {
            Ok(()) => {
                let item = ProductModel::from(data);
                repo.save(item).await.map(ProductDto::from)
            }
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            app_log_event!(logctx, AppLogLevel::ERROR, "detail:{}", e);
        }
        result
    } // end of fn execute
} // end of impl CreateProductUseCase
