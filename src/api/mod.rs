//! HTTP surface for currency conversion and the visa product catalog.

pub mod currency;
pub mod error;
pub mod extract;
pub mod products;

use crate::core::{CurrencyConverter, VisaCatalog};
use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub struct AppState {
    pub converter: Arc<CurrencyConverter>,
    pub catalog: Arc<VisaCatalog>,
}

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(currency::router())
        .merge(products::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves the API until Ctrl-C is received.
pub async fn serve(listen_addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("Failed to bind {listen_addr}"))?;
    info!("Listening on {}", listen_addr);

    axum::serve(listener, app_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await
        .context("Server error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RateCache;
    use crate::core::cache::tests::MockRateSource;
    use crate::core::currency::RateSource;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_router(source: &Arc<MockRateSource>) -> Router {
        let cache = RateCache::new(
            Arc::clone(source) as Arc<dyn RateSource>,
            Duration::from_secs(3600),
        );
        let state = AppState {
            converter: Arc::new(CurrencyConverter::new(Arc::new(cache))),
            catalog: Arc::new(VisaCatalog::seeded()),
        };
        app_router(Arc::new(state))
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_convert_endpoint() {
        let source = Arc::new(MockRateSource::new(&[("EUR", 0.9)]));
        let router = test_router(&source);

        let (status, body) = send(&router, get("/currency/convert?amount=100&from=USD&to=eur")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"amount": 100.0, "from": "USD", "to": "EUR", "converted": 90.0, "rate": 0.9})
        );
    }

    #[tokio::test]
    async fn test_convert_endpoint_client_errors() {
        let source = Arc::new(MockRateSource::new(&[("EUR", 0.9)]));
        let router = test_router(&source);

        let cases = [
            ("/currency/convert?amount=-5&from=USD&to=EUR", "Invalid amount"),
            ("/currency/convert?amount=abc&from=USD&to=EUR", "Invalid amount"),
            ("/currency/convert?amount=5&from=USD", "from and to currencies are required"),
            ("/currency/convert?amount=5&from=USD&to=ZZZ", "Currency ZZZ is not supported"),
            (
                "/currency/convert?amount=5&from=EUR&to=GBP",
                "Base currency must be USD. Please convert from USD first.",
            ),
            (
                "/currency/convert?amount=10&from=usd&to=EUR",
                "Base currency must be USD. Please convert from USD first.",
            ),
        ];
        for (uri, message) in cases {
            let (status, body) = send(&router, get(uri)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["message"], message, "{uri}");
            assert_eq!(body["statusCode"], 400);
        }
    }

    #[tokio::test]
    async fn test_convert_endpoint_unavailable() {
        let source = Arc::new(MockRateSource::new(&[("EUR", 0.9)]));
        source.set_failing(true);
        let router = test_router(&source);

        let (status, body) = send(&router, get("/currency/convert?amount=1&from=USD&to=EUR")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body["message"],
            "Currency conversion service is temporarily unavailable"
        );
    }

    #[tokio::test]
    async fn test_supported_currencies_endpoint() {
        let source = Arc::new(MockRateSource::new(&[]));
        let router = test_router(&source);

        let (status, body) = send(&router, get("/currency/supported")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currencies"].as_array().map(Vec::len), Some(17));
        assert_eq!(body["currencies"][1], "EUR");
    }

    #[tokio::test]
    async fn test_product_listing_with_filters() {
        let source = Arc::new(MockRateSource::new(&[]));
        let router = test_router(&source);

        let (status, body) = send(
            &router,
            get("/visa-products?country=japan&numberOfEntries=Multiple&limit=1&page=2"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["totalPages"], 2);
        assert_eq!(body["data"][0]["visaType"], "Student");
    }

    #[tokio::test]
    async fn test_product_crud_endpoints() {
        let source = Arc::new(MockRateSource::new(&[]));
        let router = test_router(&source);

        let new_product = json!({
            "country": "Peru",
            "visaType": "Tourist",
            "price": 60,
            "lengthOfStay": 90,
            "numberOfEntries": "Single",
            "filingFee": 5
        });
        let (status, created) = send(&router, with_json("POST", "/visa-products", new_product)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], "50");

        let (status, updated) = send(
            &router,
            with_json("PATCH", "/visa-products/50", json!({"price": 65.5})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["price"], 65.5);
        assert_eq!(updated["country"], "Peru");

        let delete = Request::delete("/visa-products/50").body(Body::empty()).unwrap();
        let (status, _) = send(&router, delete).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&router, get("/visa-products/50")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Visa product with ID 50 not found");
    }

    #[tokio::test]
    async fn test_invalid_product_is_rejected() {
        let source = Arc::new(MockRateSource::new(&[]));
        let router = test_router(&source);

        let product = json!({
            "country": "",
            "visaType": "Tourist",
            "price": 60,
            "lengthOfStay": 90,
            "numberOfEntries": "Single",
            "filingFee": 5
        });
        let (status, body) = send(&router, with_json("POST", "/visa-products", product)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "country should not be empty");
    }

    #[tokio::test]
    async fn test_malformed_product_body_is_bad_request() {
        let source = Arc::new(MockRateSource::new(&[]));
        let router = test_router(&source);

        let bad_entries = json!({
            "country": "Peru",
            "visaType": "Tourist",
            "price": 60,
            "lengthOfStay": 90,
            "numberOfEntries": "Triple",
            "filingFee": 5
        });
        let missing_type = json!({
            "country": "Peru",
            "price": 60,
            "lengthOfStay": 90,
            "numberOfEntries": "Single",
            "filingFee": 5
        });
        for (product, field) in [(bad_entries, "numberOfEntries"), (missing_type, "visaType")] {
            let (status, body) = send(&router, with_json("POST", "/visa-products", product)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{field}");
            assert_eq!(body["statusCode"], 400);
            let message = body["message"].as_str().unwrap();
            assert!(message.contains(field), "{message}");
        }

        let (status, body) = send(
            &router,
            with_json("PATCH", "/visa-products/1", json!({"numberOfEntries": "Triple"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusCode"], 400);
    }

    #[tokio::test]
    async fn test_malformed_product_query_is_bad_request() {
        let source = Arc::new(MockRateSource::new(&[]));
        let router = test_router(&source);

        let (status, body) = send(&router, get("/visa-products?minPrice=abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusCode"], 400);
        let message = body["message"].as_str().unwrap();
        assert!(message.starts_with("Failed to deserialize query string"), "{message}");
    }
}
