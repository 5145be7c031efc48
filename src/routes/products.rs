use axum::{routing::{get, post}, Router};
use crate::handlers::product::{create_product, get_product_report};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product))
        .route("/products/report", get(get_product_report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::SchemaVariant;
    use crate::database::memory_pool;

    async fn app(variant: SchemaVariant) -> Router {
        let pool = memory_pool(variant).await;
        routes().with_state(AppState::new(pool, variant))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/products")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn created_product_shows_up_in_report() {
        let app = app(SchemaVariant::Detailed).await;

        let created = app
            .clone()
            .oneshot(post_json(
                r#"{"sku":1,"name":"Widget","product_detail":{"detail_id":10,"detail":"red"}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);

        let json: serde_json::Value = serde_json::from_str(&body_text(created).await).unwrap();
        assert_eq!(json["sku"], 1);
        assert_eq!(json["product_detail"]["detail"], "red");

        let report = app
            .oneshot(
                Request::builder()
                    .uri("/products/report?sku=1&name=Widget")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(report.status(), StatusCode::OK);
        assert_eq!(
            body_text(report).await,
            "Product Details :  sku : 1 name : Widget detail_id : 10 product_detail : red\n"
        );
    }

    #[tokio::test]
    async fn report_accepts_any_sku_and_name_text() {
        let app = app(SchemaVariant::Detailed).await;
        let created = app
            .clone()
            .oneshot(post_json(
                r#"{"sku":1,"name":"Widget","product_detail":{"detail_id":10,"detail":"red"}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);

        for uri in [
            "/products/report?sku=&name=",
            "/products/report?sku=abc",
            "/products/report?sku=99999999999&name=Other",
        ] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert_eq!(
                body_text(response).await,
                "Product Details :  sku : 1 name : Widget detail_id : 10 product_detail : red\n",
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn duplicate_sku_is_rejected_with_conflict() {
        let app = app(SchemaVariant::Flat).await;
        let body = r#"{"sku":3,"name":"Nut"}"#;

        let first = app.clone().oneshot(post_json(body)).await.unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app.oneshot(post_json(body)).await.unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn flat_schema_rejects_product_detail() {
        let app = app(SchemaVariant::Flat).await;

        let response = app
            .oneshot(post_json(
                r#"{"sku":1,"name":"Widget","product_detail":{"detail_id":10,"detail":"red"}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
