pub mod product;
pub mod flat_product;
