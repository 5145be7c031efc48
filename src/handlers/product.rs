// src/handlers/product.rs
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use sqlx::{Error as SqlxError, SqlitePool};
use tracing::{debug, error, info, instrument};

use crate::config::SchemaVariant;
use crate::dtos::product::{CreateProductRequest, ProductQueryParams, ProductResponse};
use crate::error::AppError;
use crate::models::flat_product::FlatProduct;
use crate::models::product::{Product, ProductRow};
use crate::state::AppState;

pub const REPORT_HEADER: &str = "Product Details : ";
pub const EXCEPTION_PREFIX: &str = "There is an exception";

const SELECT_PRODUCTS: &str = "SELECT p.sku, p.name, p.detail_id, d.detail
     FROM product p
     LEFT JOIN product_detail d ON d.detail_id = p.detail_id";

const SELECT_FLAT_PRODUCTS: &str = "SELECT sku, name FROM product";

fn map_unique_violation(err: SqlxError, message: &str) -> AppError {
    match err {
        SqlxError::Database(db_err) if db_err.is_unique_violation() => AppError::conflict(message),
        other => other.into(),
    }
}

/// Renders every product row into one report.
///
/// `params` is accepted for callers that pass a sku/name pair but does not
/// narrow the select: every row comes back, in whatever order the store
/// yields. Any failure replaces the report with `"There is an exception"`
/// followed by the error message.
#[instrument(skip(pool))]
pub async fn list_products(
    pool: &SqlitePool,
    variant: SchemaVariant,
    params: &ProductQueryParams,
) -> String {
    debug!(sku = ?params.sku, name = ?params.name, "Listing all products, parameters ignored");
    match build_report(pool, variant).await {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Failed to list products");
            format!("{EXCEPTION_PREFIX}{e}")
        }
    }
}

async fn build_report(pool: &SqlitePool, variant: SchemaVariant) -> Result<String, AppError> {
    // Session is scoped to this call and goes back to the pool on drop.
    let mut conn = pool.acquire().await?;
    let mut report = String::from(REPORT_HEADER);

    match variant {
        SchemaVariant::Detailed => {
            let rows = sqlx::query_as::<_, ProductRow>(SELECT_PRODUCTS)
                .fetch_all(&mut *conn)
                .await?;
            debug!(rows = rows.len(), "Fetched products");
            for row in rows {
                report.push_str(&Product::from(row).render()?);
                report.push('\n');
            }
        }
        SchemaVariant::Flat => {
            let products = sqlx::query_as::<_, FlatProduct>(SELECT_FLAT_PRODUCTS)
                .fetch_all(&mut *conn)
                .await?;
            debug!(rows = products.len(), "Fetched products");
            for product in products {
                report.push_str(&product.render());
                report.push('\n');
            }
        }
    }

    Ok(report)
}

/// Persists a product and its detail in one transaction, detail first.
#[instrument(skip(pool, product), fields(sku = product.sku()))]
pub async fn insert_product(pool: &SqlitePool, product: &Product) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    if let Some(detail) = product.product_detail() {
        sqlx::query("INSERT INTO product_detail (detail_id, detail) VALUES (?, ?)")
            .bind(detail.detail_id())
            .bind(detail.detail())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_unique_violation(e, "Product detail already exists"))?;
    }

    sqlx::query("INSERT INTO product (sku, name, detail_id) VALUES (?, ?, ?)")
        .bind(product.sku())
        .bind(product.name())
        .bind(product.product_detail().map(|d| d.detail_id()))
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, "Product sku already exists"))?;

    tx.commit().await?;
    info!("Product stored");
    Ok(())
}

#[instrument(skip(pool, product), fields(sku = product.sku()))]
pub async fn insert_flat_product(pool: &SqlitePool, product: &FlatProduct) -> Result<(), AppError> {
    sqlx::query("INSERT INTO product (sku, name) VALUES (?, ?)")
        .bind(product.sku())
        .bind(product.name())
        .execute(pool)
        .await
        .map_err(|e| map_unique_violation(e, "Product sku already exists"))?;

    info!("Product stored");
    Ok(())
}

// GET /products/report - Text report of every product
pub async fn get_product_report(
    State(AppState { db_pool, variant }): State<AppState>,
    Query(params): Query<ProductQueryParams>,
) -> String {
    list_products(&db_pool, variant, &params).await
}

// POST /products - Create new product
#[instrument(skip(db_pool, payload))]
pub async fn create_product(
    State(AppState { db_pool, variant }): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let response = match variant {
        SchemaVariant::Detailed => {
            let product = Product::from(payload);
            insert_product(&db_pool, &product).await?;
            ProductResponse::from(&product)
        }
        SchemaVariant::Flat => {
            if payload.product_detail.is_some() {
                return Err(AppError::validation(
                    "product_detail is not part of the flat product schema",
                ));
            }
            let product = FlatProduct::new(payload.sku, payload.name);
            insert_flat_product(&db_pool, &product).await?;
            ProductResponse::from(&product)
        }
    };

    Ok((StatusCode::CREATED, Json(response)))
}
