// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::models::flat_product::FlatProduct;
use crate::models::product::{Product, ProductDetail};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProductDetailPayload {
    pub detail_id: i32,
    pub detail: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub sku: i32,
    pub name: Option<String>,
    pub product_detail: Option<ProductDetailPayload>,
}

/// Parameters of the report query. Accepted but not used to filter rows,
/// so `sku` stays raw text and any value is let through.
#[derive(Debug, Deserialize, Default)]
pub struct ProductQueryParams {
    pub sku: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub sku: i32,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_detail: Option<ProductDetailPayload>,
}

impl From<CreateProductRequest> for Product {
    fn from(req: CreateProductRequest) -> Self {
        let detail = req
            .product_detail
            .map(|d| ProductDetail::new(d.detail_id, d.detail));
        Product::new(req.sku, req.name, detail)
    }
}

// Convert from Model to Response DTO
impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            sku: product.sku(),
            name: product.name().map(str::to_owned),
            product_detail: product.product_detail().map(|d| ProductDetailPayload {
                detail_id: d.detail_id(),
                detail: d.detail().map(str::to_owned),
            }),
        }
    }
}

impl From<&FlatProduct> for ProductResponse {
    fn from(product: &FlatProduct) -> Self {
        Self {
            sku: product.sku(),
            name: product.name().map(str::to_owned),
            product_detail: None,
        }
    }
}
