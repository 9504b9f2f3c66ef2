use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct ProductDto {
    // identifier is absent in creation requests, the datastore
    // assigns one when the item is persisted at the first time
    pub id: Option<u64>,
    pub name: String,
    pub price: Decimal,
}
