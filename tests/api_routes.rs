//! Integration tests per health check, fallback 404 e CORS

mod common;

#[cfg(test)]
mod route_tests {
    use super::common::*;
    use axum::{
        Router,
        http::{HeaderName, HeaderValue, Method, StatusCode},
        routing::get,
    };
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use tower_http::catch_panic::CatchPanicLayer;

    async fn exploding_handler() -> StatusCode {
        panic!("handler exploded")
    }

    #[tokio::test]
    async fn test_health_check() {
        let (_state, server) = setup().await;

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "up");
    }

    #[tokio::test]
    async fn test_health_check_database_down() {
        let (state, server) = setup().await;
        state.pool.close().await;

        let response = server.get("/health").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.json::<Value>()["database"], "down");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (_state, server) = setup().await;

        for path in ["/nope", "/api/v1/nope"] {
            let response = server.get(path).await;
            response.assert_status_not_found();
            let body = response.json::<Value>();
            assert_eq!(body["error"], "Not Found");
            assert_eq!(body["message"], "The requested endpoint does not exist");
        }
    }

    #[tokio::test]
    async fn test_cors_headers() {
        let (_state, server) = setup().await;

        let response = server
            .get("/health")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("http://localhost:5173"),
            )
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.header("access-control-allow-origin"),
            "http://localhost:5173"
        );
        assert_eq!(response.header("access-control-allow-credentials"), "true");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let (_state, server) = setup().await;

        // il preflight non porta token: deve passare senza 401
        let response = server
            .method(Method::OPTIONS, "/api/v1/products")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("http://localhost:5173"),
            )
            .add_header(
                HeaderName::from_static("access-control-request-method"),
                HeaderValue::from_static("PUT"),
            )
            .add_header(
                HeaderName::from_static("access-control-request-headers"),
                HeaderValue::from_static("authorization,content-type"),
            )
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.header("access-control-allow-origin"),
            "http://localhost:5173"
        );

        let methods = response.header("access-control-allow-methods");
        let methods = methods.to_str().unwrap();
        for method in ["POST", "OPTIONS", "GET", "PUT", "DELETE"] {
            assert!(methods.contains(method), "missing {method} in {methods}");
        }

        let headers = response.header("access-control-allow-headers");
        let headers = headers.to_str().unwrap().to_ascii_lowercase();
        for name in [
            "content-type",
            "content-length",
            "accept-encoding",
            "x-csrf-token",
            "authorization",
            "accept",
            "origin",
            "cache-control",
            "x-requested-with",
        ] {
            assert!(headers.contains(name), "missing {name} in {headers}");
        }
    }

    #[tokio::test]
    async fn test_unsupported_method_on_protected_route() {
        let (_state, server) = setup().await;

        for path in ["/api/v1/products", "/api/v1/products/1", "/api/v1/profile"] {
            let response = server
                .method(Method::PATCH, path)
                .json(&json!({ "price": 1.0 }))
                .await;

            response.assert_status_not_found();
            let body = response.json::<Value>();
            assert_eq!(body["error"], "Not Found");
            assert_eq!(body["message"], "The requested endpoint does not exist");
        }
    }

    #[tokio::test]
    async fn test_panic_is_turned_into_json_500() {
        let app = Router::new()
            .route("/boom", get(exploding_handler))
            .layer(CatchPanicLayer::custom(product_api::handle_panic));
        let server = TestServer::new(app).expect("Failed to create test server");

        let response = server.get("/boom").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Internal server error" })
        );
    }
}
