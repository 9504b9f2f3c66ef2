
use std::boxed::Box;
use std::sync::Arc;

use async_trait::async_trait;

use ::product::datastore::{
    AbsDStoreFilterKeyOp, AbstInMemoryDStore, AppInMemDeleteInfo, AppInMemFetchKeys,
    AppInMemFetchedData, AppInMemUpdateData,
};
use ::product::error::{AppError, AppErrorCode};
use ::product::{AppDataStoreContext, AppInMemoryDbCfg};

pub(super) fn in_mem_ds_ctx_setup<T: AbstInMemoryDStore + 'static>(
    max_items: u32,
) -> Arc<AppDataStoreContext> {
    let d = AppInMemoryDbCfg {
        alias: "utest".to_string(),
        max_items,
    };
    let obj = T::new(&d);
    let obj: Box<dyn AbstInMemoryDStore> = Box::new(obj);
    let inmem_ds = Arc::new(obj);
    Arc::new(AppDataStoreContext {
        in_mem: Some(inmem_ds),
    })
}

struct MockInMemDeadDataStore {}

#[async_trait]
impl AbstInMemoryDStore for MockInMemDeadDataStore {
    fn new(_cfg: &AppInMemoryDbCfg) -> Self {
        Self {}
    }
    async fn create_table(&self, _label: &str) -> Result<(), AppError> {
        Ok(())
    }
    async fn save(&self, _data: AppInMemUpdateData) -> Result<usize, AppError> {
        Err(AppError {
            code: AppErrorCode::DataTableNotExist,
            detail: Some("utest".to_string()),
        })
    }
    async fn fetch(&self, _keys: AppInMemFetchKeys) -> Result<AppInMemFetchedData, AppError> {
        Err(AppError {
            code: AppErrorCode::AcquireLockFailure,
            detail: Some("utest".to_string()),
        })
    }
    async fn delete(&self, _info: AppInMemDeleteInfo) -> Result<usize, AppError> {
        Err(AppError {
            code: AppErrorCode::NotImplemented,
            detail: Some("utest".to_string()),
        })
    }
    async fn filter_keys(
        &self,
        _tbl_label: String,
        _op: &dyn AbsDStoreFilterKeyOp,
    ) -> Result<Vec<String>, AppError> {
        Err(AppError {
            code: AppErrorCode::NotImplemented,
            detail: Some("utest".to_string()),
        })
    }
}
