use std::cell::RefCell;
use std::collections::HashMap;
use std::result::Result as DefaultResult;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::config::AppInMemoryDbCfg;
use crate::error::{AppError, AppErrorCode};

// application callers are responsible to maintain the row layout of each
// table, every column is stringified regardless of its original type
type InnerRow = Vec<String>;
type InnerTable = HashMap<String, InnerRow>;
type AllTable = HashMap<String, InnerTable>;

pub type AppInMemUpdateData = AllTable;
pub type AppInMemDeleteInfo = InnerTable;
pub type AppInMemFetchKeys = InnerTable;
pub type AppInMemFetchedData = AllTable;
pub type AppInMemFetchedSingleTable = InnerTable;
pub type AppInMemFetchedSingleRow = InnerRow;

// `Send` and `Sync` are required as super-traits, the filter operation
// is passed around among threads of the async runtime
pub trait AbsDStoreFilterKeyOp: Send + Sync {
    fn filter(&self, key: &String, row: &Vec<String>) -> bool;
}

#[async_trait]
pub trait AbstInMemoryDStore: Send + Sync {
    fn new(cfg: &AppInMemoryDbCfg) -> Self
    where
        Self: Sized;
    async fn create_table(&self, label: &str) -> DefaultResult<(), AppError>;
    async fn save(&self, data: AppInMemUpdateData) -> DefaultResult<usize, AppError>;
    async fn fetch(&self, keys: AppInMemFetchKeys) -> DefaultResult<AppInMemFetchedData, AppError>;
    async fn delete(&self, info: AppInMemDeleteInfo) -> DefaultResult<usize, AppError>;
    async fn filter_keys(
        &self,
        tbl_label: String,
        op: &dyn AbsDStoreFilterKeyOp,
    ) -> DefaultResult<Vec<String>, AppError>;
}

// the wrapped table collection is guarded by the mutex below, none of the
// trait methods holds the lock across an await point
pub struct AppInMemoryDStore {
    max_items_per_table: u32,
    table_map: Mutex<RefCell<AllTable>>,
}

impl AppInMemoryDStore {
    fn try_get_table(&self) -> DefaultResult<MutexGuard<RefCell<AllTable>>, AppError> {
        self.table_map.lock().map_err(|e| AppError {
            code: AppErrorCode::AcquireLockFailure,
            detail: Some(e.to_string()),
        })
    }

    fn _check_capacity(&self, map: &AllTable) -> DefaultResult<(), AppError> {
        let mut oversized = map
            .iter()
            .filter(|(_label, table)| self.max_items_per_table as usize <= table.len());
        if let Some((label, _table)) = oversized.next() {
            let msg = format!("{}, {}, {}", module_path!(), line!(), label);
            Err(AppError {
                code: AppErrorCode::ExceedingMaxLimit,
                detail: Some(msg),
            })
        } else {
            Ok(())
        }
    }

    fn _check_table_existence(map: &AllTable, labels: Vec<&String>) -> DefaultResult<(), AppError> {
        let mut absent = labels.iter().filter(|label| !map.contains_key(label.as_str()));
        if let Some(label) = absent.next() {
            Err(AppError {
                code: AppErrorCode::DataTableNotExist,
                detail: Some(label.to_string()),
            })
        } else {
            Ok(())
        }
    }
} // end of impl AppInMemoryDStore

#[async_trait]
impl AbstInMemoryDStore for AppInMemoryDStore {
    fn new(cfg: &AppInMemoryDbCfg) -> Self {
        let t_map = Mutex::new(RefCell::new(HashMap::new()));
        Self {
            table_map: t_map,
            max_items_per_table: cfg.max_items,
        }
    }

    async fn create_table(&self, label: &str) -> DefaultResult<(), AppError> {
        let guard = self.try_get_table()?;
        let mut map = guard.borrow_mut();
        if !map.contains_key(label) {
            map.insert(label.to_string(), HashMap::new());
        }
        Ok(())
    }

    async fn save(&self, data: AppInMemUpdateData) -> DefaultResult<usize, AppError> {
        let guard = self.try_get_table()?;
        let mut map = guard.borrow_mut();
        Self::_check_table_existence(&map, data.keys().collect())?;
        self._check_capacity(&map)?;
        let tot_num_saved = data
            .iter()
            .map(|(label, rows)| {
                let table = map.get_mut(label.as_str()).unwrap();
                rows.iter()
                    .map(|(pkey, row)| {
                        table.insert(pkey.clone(), row.clone());
                    })
                    .count()
            })
            .sum();
        // note rows beyond the capacity still land in the table, the check
        // reports the overflow so callers discard the whole datastore
        self._check_capacity(&map)?;
        Ok(tot_num_saved)
    } // end of fn save

    async fn fetch(&self, keys: AppInMemFetchKeys) -> DefaultResult<AppInMemFetchedData, AppError> {
        let guard = self.try_get_table()?;
        let map = guard.borrow();
        Self::_check_table_existence(&map, keys.keys().collect())?;
        let result = keys
            .iter()
            .map(|(label, ids)| {
                let table = map.get(label.as_str()).unwrap();
                let found = ids
                    .iter()
                    .filter_map(|id| table.get(id).map(|row| (id.clone(), row.clone())))
                    .collect::<AppInMemFetchedSingleTable>();
                (label.clone(), found)
            })
            .collect::<AppInMemFetchedData>();
        Ok(result)
    } // missing keys are silently skipped, the caller is responsible to
      // figure out which rows are absent from the result set

    async fn delete(&self, info: AppInMemDeleteInfo) -> DefaultResult<usize, AppError> {
        let guard = self.try_get_table()?;
        let mut map = guard.borrow_mut();
        Self::_check_table_existence(&map, info.keys().collect())?;
        let tot_num_deleted = info
            .iter()
            .map(|(label, ids)| {
                let table = map.get_mut(label.as_str()).unwrap();
                ids.iter()
                    .filter(|id| table.remove(id.as_str()).is_some())
                    .count()
            })
            .sum();
        Ok(tot_num_deleted)
    }

    async fn filter_keys(
        &self,
        tbl_label: String,
        op: &dyn AbsDStoreFilterKeyOp,
    ) -> DefaultResult<Vec<String>, AppError> {
        let guard = self.try_get_table()?;
        let map = guard.borrow();
        if let Some(table) = map.get(tbl_label.as_str()) {
            let keys = table
                .iter()
                .filter(|(key, row)| op.filter(key, row))
                .map(|(key, _row)| key.clone())
                .collect::<Vec<_>>();
            Ok(keys)
        } else {
            Err(AppError {
                code: AppErrorCode::DataTableNotExist,
                detail: Some(tbl_label),
            })
        }
    }
} // end of impl AbstInMemoryDStore
