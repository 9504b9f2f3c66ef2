mod in_mem;

use std::boxed::Box;
use std::result::Result as DefaultResult;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AppError, AppErrorCode};
use crate::model::ProductModel;
use crate::AppDataStoreContext;

// make in-memory repository visible only for testing purpose
pub use in_mem::product::ProductInMemRepo;

// the repository instance may be used across an await, the future created
// by app callers has to be able to pass to different threads, it is the
// reason to add `Send` and `Sync` as super-traits
#[async_trait]
pub trait AbsProductRepo: Sync + Send {
    async fn fetch_one(&self, product_id: u64) -> DefaultResult<ProductModel, AppError>;
    // on creation the datastore emits a new identifier, the returned model
    // always carries the final one
    async fn save(&self, item: ProductModel) -> DefaultResult<ProductModel, AppError>;
}

pub async fn app_repo_product(
    ds: Arc<AppDataStoreContext>,
) -> DefaultResult<Box<dyn AbsProductRepo>, AppError> {
    if let Some(m) = ds.in_mem.as_ref() {
        let obj = ProductInMemRepo::new(m.clone()).await?;
        Ok(Box::new(obj))
    } else {
        Err(AppError {
            code: AppErrorCode::MissingDataStore,
            detail: Some("unknown-type".to_string()),
        })
    }
}
