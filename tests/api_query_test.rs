//! Integration tests for the query API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_string, test_app};

    const ACME_ANSWER: &str = r#"{"answer": "Acme collects email and usage data.", "sources": [{"url": "https://acme.com/privacy", "domain": "acme.com", "type": "privacy_policy"}]}"#;

    fn query_request(body: &str) -> Request<Body> {
        Request::builder()
            .uri("/api/query")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// Tests a healthy upstream answer is relayed byte for byte
    #[tokio::test]
    async fn it_passes_through_upstream_answers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .match_body(mockito::Matcher::Json(
                json!({"query": "What data does Acme collect?"}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(ACME_ANSWER)
            .expect(1)
            .create_async()
            .await;

        let app = test_app(&server.url());
        let response = app
            .oneshot(query_request(
                r#"{"query": "What data does Acme collect?"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            "application/json"
        );
        let body = body_to_string(response.into_body()).await;
        assert_eq!(body, ACME_ANSWER);

        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert!(parsed.get("answer").is_some());
        assert!(parsed.get("error").is_none());
        mock.assert_async().await;
    }

    /// Tests empty and blank queries never reach the upstream
    #[tokio::test]
    async fn it_rejects_empty_queries_without_calling_upstream() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_body(ACME_ANSWER)
            .expect(0)
            .create_async()
            .await;

        for body in [r#"{"query": ""}"#, r#"{"query": "   "}"#, r#"{}"#, "not json"] {
            let app = test_app(&server.url());
            let response = app.oneshot(query_request(body)).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let body = body_to_string(response.into_body()).await;
            let parsed: Value = serde_json::from_str(&body).unwrap();
            assert_eq!(parsed, json!({"error": "No query provided"}));
        }

        mock.assert_async().await;
    }

    /// Tests non-200 upstream statuses become in-band errors
    #[tokio::test]
    async fn it_wraps_upstream_failures() {
        for status in [201, 400, 404, 500, 503] {
            let mut server = mockito::Server::new_async().await;
            let _mock = server
                .mock("POST", "/api/chat")
                .with_status(status)
                .with_body("upstream says no")
                .create_async()
                .await;

            let app = test_app(&server.url());
            let response = app
                .oneshot(query_request(r#"{"query": "hello"}"#))
                .await
                .unwrap();

            // Errors are signalled in the body only
            assert_eq!(response.status(), StatusCode::OK);
            let body = body_to_string(response.into_body()).await;
            let parsed: Value = serde_json::from_str(&body).unwrap();
            assert_eq!(parsed["error"], "Python API Error: upstream says no");
            assert!(parsed.get("answer").is_none());
        }
    }

    /// Tests an unreachable upstream becomes an in-band error
    #[tokio::test]
    async fn it_wraps_transport_failures() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let app = test_app(&format!("http://{}", addr));
        let response = app
            .oneshot(query_request(r#"{"query": "hello"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        let parsed: Value = serde_json::from_str(&body).unwrap();
        let error = parsed["error"].as_str().unwrap();
        assert!(error.starts_with("Python API Error: "));
        assert!(parsed.get("answer").is_none());
    }

    /// Tests bodies over the buffering limit still get a JSON error
    /// envelope with status 200
    #[tokio::test]
    async fn it_wraps_oversized_bodies() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .expect(0)
            .create_async()
            .await;

        let huge = format!(r#"{{"query": "{}"}}"#, "a".repeat(3 * 1024 * 1024));
        let app = test_app(&server.url());
        let response = app.oneshot(query_request(&huge)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            "application/json"
        );
        let body = body_to_string(response.into_body()).await;
        let parsed: Value = serde_json::from_str(&body).unwrap();
        let error = parsed["error"].as_str().unwrap();
        assert!(error.starts_with("Invalid request body: "));
        assert!(parsed.get("answer").is_none());
        mock.assert_async().await;
    }

    /// Tests the health endpoint
    #[tokio::test]
    async fn it_reports_health() {
        let app = test_app("http://localhost:1");
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("\"status\":\"healthy\""));
    }
}
