mod create_product;
mod edit_product;

pub use create_product::CreateProductUseCase;
pub use edit_product::EditProductUseCase;
