pub(super) mod product;
