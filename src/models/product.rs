use sqlx::FromRow;

use crate::error::AppError;

/// Row of `product_detail`, owned one-to-one by a [`Product`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    detail_id: i32,
    detail: Option<String>,
}

impl ProductDetail {
    pub fn new(detail_id: i32, detail: Option<String>) -> Self {
        Self { detail_id, detail }
    }

    pub fn detail_id(&self) -> i32 {
        self.detail_id
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

/// Row of `product`, with its detail joined on `detail_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    sku: i32,
    name: Option<String>,
    product_detail: Option<ProductDetail>,
}

impl Product {
    pub fn new(sku: i32, name: Option<String>, product_detail: Option<ProductDetail>) -> Self {
        Self {
            sku,
            name,
            product_detail,
        }
    }

    pub fn sku(&self) -> i32 {
        self.sku
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn product_detail(&self) -> Option<&ProductDetail> {
        self.product_detail.as_ref()
    }

    /// Report line for this product. Fails when no detail is linked.
    pub fn render(&self) -> Result<String, AppError> {
        let detail = self
            .product_detail
            .as_ref()
            .ok_or(AppError::MissingDetail { sku: self.sku })?;

        Ok(format!(
            " sku : {} name : {} detail_id : {} product_detail : {}",
            self.sku,
            or_null(self.name()),
            detail.detail_id,
            or_null(detail.detail()),
        ))
    }
}

pub(crate) fn or_null(value: Option<&str>) -> &str {
    value.unwrap_or("null")
}

// Shape of `product LEFT JOIN product_detail`.
#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub sku: i32,
    pub name: Option<String>,
    pub detail_id: Option<i32>,
    pub detail: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        let product_detail = row
            .detail_id
            .map(|detail_id| ProductDetail::new(detail_id, row.detail));
        Product::new(row.sku, row.name, product_detail)
    }
}
