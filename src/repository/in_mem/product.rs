use async_trait::async_trait;
use std::boxed::Box;
use std::collections::HashMap;
use std::convert::Into;
use std::result::Result as DefaultResult;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::super::AbsProductRepo;
use crate::datastore::{
    AbsDStoreFilterKeyOp, AbstInMemoryDStore, AppInMemFetchedSingleRow, AppInMemUpdateData,
};
use crate::error::{AppError, AppErrorCode};
use crate::model::ProductModel;

const TABLE_LABEL: &str = "product";

enum InMemColIdx {
    Name,
    Price,
    TotNumColumns,
}

impl Into<usize> for InMemColIdx {
    fn into(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Price => 1,
            Self::TotNumColumns => 2,
        }
    }
}

// primary keys of the product table are stringified numeric identifiers,
// the scan below visits all of them to figure out the next identifier
struct AllKeysOp;

impl AbsDStoreFilterKeyOp for AllKeysOp {
    fn filter(&self, _key: &String, _row: &Vec<String>) -> bool {
        true
    }
}

pub struct ProductInMemRepo {
    datastore: Arc<Box<dyn AbstInMemoryDStore>>,
}

impl ProductInMemRepo {
    pub async fn new(m: Arc<Box<dyn AbstInMemoryDStore>>) -> DefaultResult<Self, AppError> {
        m.create_table(TABLE_LABEL).await?;
        Ok(Self { datastore: m })
    }

    async fn next_id(&self) -> DefaultResult<u64, AppError> {
        let op = AllKeysOp;
        let saved_pkeys = self
            .datastore
            .filter_keys(TABLE_LABEL.to_string(), &op)
            .await?;
        let largest = saved_pkeys
            .into_iter()
            .filter_map(|k| k.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Ok(largest + 1)
    }

    fn rowify(item: &ProductModel) -> AppInMemFetchedSingleRow {
        // manually allocate space in advance, instead of `Vec::with_capacity`
        let mut row = (0..InMemColIdx::TotNumColumns.into())
            .map(|_n| String::new())
            .collect::<Vec<String>>();
        let _ = [
            // so the order of columns can be arbitrary
            (InMemColIdx::Price, item.price.to_string()),
            (InMemColIdx::Name, item.name.clone()),
        ]
        .into_iter()
        .map(|(idx, val)| {
            let idx: usize = idx.into();
            row[idx] = val;
        })
        .collect::<Vec<()>>();
        row
    }

    fn parse_row(
        product_id: u64,
        row: AppInMemFetchedSingleRow,
    ) -> DefaultResult<ProductModel, AppError> {
        let name = row
            .get::<usize>(InMemColIdx::Name.into())
            .ok_or(AppError {
                code: AppErrorCode::DataCorruption,
                detail: Some(format!("name-column-missing, id: {}", product_id)),
            })?
            .to_string();
        let price = row
            .get::<usize>(InMemColIdx::Price.into())
            .ok_or(AppError {
                code: AppErrorCode::DataCorruption,
                detail: Some(format!("price-column-missing, id: {}", product_id)),
            })
            .and_then(|raw| {
                Decimal::from_str_radix(raw.as_str(), 10).map_err(|e| AppError {
                    code: AppErrorCode::DataCorruption,
                    detail: Some(format!("price-decode-fail, saved: {}, reason: {:?}", raw, e)),
                })
            })?;
        Ok(ProductModel {
            id: Some(product_id),
            name,
            price,
        })
    } // end of fn parse_row
} // end of impl ProductInMemRepo

#[async_trait]
impl AbsProductRepo for ProductInMemRepo {
    async fn fetch_one(&self, product_id: u64) -> DefaultResult<ProductModel, AppError> {
        let info = {
            let items = [(TABLE_LABEL.to_string(), vec![product_id.to_string()])];
            HashMap::from(items)
        };
        let mut resultset = self.datastore.fetch(info).await?;
        let mut table = resultset.remove(TABLE_LABEL).ok_or(AppError {
            code: AppErrorCode::DataTableNotExist,
            detail: Some(TABLE_LABEL.to_string()),
        })?;
        let row = table.remove(&product_id.to_string()).ok_or(AppError {
            code: AppErrorCode::ProductNotExist,
            detail: Some(format!("product-id: {}", product_id)),
        })?;
        Self::parse_row(product_id, row)
    } // end of fn fetch_one

    async fn save(&self, item: ProductModel) -> DefaultResult<ProductModel, AppError> {
        let id_final = match item.id {
            Some(given) => given,
            None => self.next_id().await?,
        };
        let data: AppInMemUpdateData = {
            let mut h = HashMap::new();
            let table_data = {
                let kv_pairs = [(id_final.to_string(), Self::rowify(&item))];
                HashMap::from(kv_pairs)
            };
            h.insert(TABLE_LABEL.to_string(), table_data);
            h
        };
        let _num_saved = self.datastore.save(data).await?;
        Ok(ProductModel {
            id: Some(id_final),
            name: item.name,
            price: item.price,
        })
    } // end of fn save
} // end of impl AbsProductRepo
