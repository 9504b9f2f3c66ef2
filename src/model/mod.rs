mod product;

pub use product::ProductModel;
