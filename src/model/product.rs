use std::result::Result as DefaultResult;

use rust_decimal::Decimal;

use crate::api::dto::ProductDto;
use crate::error::{AppError, AppErrorCode};

#[derive(Clone)]
pub struct ProductModel {
    pub id: Option<u64>,
    pub name: String,
    pub price: Decimal,
}

impl ProductModel {
    // the check is kept as a pure function, use cases apply it to incoming
    // data before touching any underlying datastore
    pub fn validate(data: &ProductDto) -> DefaultResult<(), AppError> {
        if data.name.trim().is_empty() {
            return Err(AppError {
                code: AppErrorCode::InvalidInput,
                detail: Some("product-name-blank".to_string()),
            });
        }
        if data.price <= Decimal::ZERO {
            return Err(AppError {
                code: AppErrorCode::InvalidInput,
                detail: Some(format!("product-price-non-positive: {}", data.price)),
            });
        }
        Ok(())
    } // end of fn validate

    pub fn update(mut self, data: ProductDto) -> DefaultResult<Self, AppError> {
        // identifier of a saved product is immutable, whatever the given
        // data carries in its `id` field is discarded
        self.name = data.name;
        self.price = data.price;
        Ok(self)
    }
} // end of impl ProductModel

impl From<ProductDto> for ProductModel {
    fn from(value: ProductDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
        }
    }
}

impl From<ProductModel> for ProductDto {
    fn from(value: ProductModel) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
        }
    }
}
