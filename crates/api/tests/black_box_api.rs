use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{Value, json};

use searchsync_api::app::services::AppServices;
use searchsync_catalog::OrphanPolicy;
use searchsync_infra::EngineConfig;

struct TestServer {
    base_url: String,
    services: Arc<AppServices>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_with(EngineConfig::default()).await
    }

    async fn spawn_with(config: EngineConfig) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let services = Arc::new(AppServices::in_memory(config));
        let app = searchsync_api::app::build_app_with(services.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            services,
            handle,
        }
    }

    async fn ingest(&self, client: &reqwest::Client, body: Value) -> (StatusCode, Value) {
        let res = client
            .post(format!("{}/api/ingest", self.base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn product_becomes_searchable_once_an_offer_arrives() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) = srv
        .ingest(
            &client,
            json!({ "operation": "UPSERT_PRODUCT", "productId": "P1", "productName": "Phone" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = srv
        .ingest(
            &client,
            json!({
                "operation": "UPSERT_OFFER",
                "offerId": "O1",
                "offerName": "Red",
                "relatedProductId": "P1"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "operationType": "UPSERT_SEARCHABLE_PRODUCT",
            "productId": "P1",
            "productName": "Phone",
            "offerNames": ["Red"]
        }])
    );
}

#[tokio::test]
async fn moving_the_last_offer_retracts_the_old_product() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for body in [
        json!({ "operation": "UPSERT_PRODUCT", "productId": "P1", "productName": "Phone" }),
        json!({ "operation": "UPSERT_PRODUCT", "productId": "P2", "productName": "Tablet" }),
        json!({ "operation": "UPSERT_OFFER", "offerId": "O1", "offerName": "Red", "relatedProductId": "P1" }),
    ] {
        let (status, _) = srv.ingest(&client, body).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = srv
        .ingest(
            &client,
            json!({ "operation": "UPSERT_OFFER", "offerId": "O1", "offerName": "Red", "relatedProductId": "P2" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "operationType": "DELETE_SEARCHABLE_PRODUCT", "productId": "P1" },
            {
                "operationType": "UPSERT_SEARCHABLE_PRODUCT",
                "productId": "P2",
                "productName": "Tablet",
                "offerNames": ["Red"]
            }
        ])
    );

    let state = srv.services.snapshot().unwrap();
    assert_eq!(state.product_count(), 1, "P1 is purged once orphaned");
}

#[tokio::test]
async fn retain_policy_keeps_orphaned_products() {
    let srv = TestServer::spawn_with(
        EngineConfig::default().with_orphan_policy(OrphanPolicy::Retain),
    )
    .await;
    let client = reqwest::Client::new();

    for body in [
        json!({ "operation": "UPSERT_PRODUCT", "productId": "P1", "productName": "Phone" }),
        json!({ "operation": "UPSERT_OFFER", "offerId": "O1", "offerName": "Red", "relatedProductId": "P1" }),
        json!({ "operation": "DELETE_OFFER", "offerId": "O1" }),
    ] {
        let (status, _) = srv.ingest(&client, body).await;
        assert_eq!(status, StatusCode::OK);
    }

    let state = srv.services.snapshot().unwrap();
    assert_eq!(state.product_count(), 1);
    assert_eq!(state.offer_count(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_ingests_all_apply() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, _) = srv
        .ingest(
            &client,
            json!({ "operation": "UPSERT_PRODUCT", "productId": "P1", "productName": "Phone" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..32 {
        let client = client.clone();
        let url = format!("{}/api/ingest", srv.base_url);
        tasks.spawn(async move {
            let res = client
                .post(url)
                .json(&json!({
                    "operation": "UPSERT_OFFER",
                    "offerId": format!("O{i}"),
                    "offerName": format!("Offer {i}"),
                    "relatedProductId": "P1"
                }))
                .send()
                .await
                .unwrap();
            let status = res.status();
            let body: Value = res.json().await.unwrap();
            (status, body)
        });
    }
    while let Some(joined) = tasks.join_next().await {
        let (status, body) = joined.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["operationType"], "UPSERT_SEARCHABLE_PRODUCT");
    }

    let state = srv.services.snapshot().unwrap();
    assert_eq!(state.offer_count(), 32);

    let health = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(health.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_required_field_is_a_validation_error() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) = srv
        .ingest(&client, json!({ "operation": "UPSERT_OFFER", "offerId": "O1" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(
        body["message"],
        "Field: offerName must not be null for operation: UPSERT_OFFER"
    );

    let state = srv.services.snapshot().unwrap();
    assert_eq!(state.offer_count(), 0);
}

#[tokio::test]
async fn unknown_operation_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) = srv
        .ingest(&client, json!({ "operation": "MERGE_PRODUCTS", "productId": "P1" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unsupported_operation");
    assert!(body["message"].as_str().unwrap().contains("MERGE_PRODUCTS"));
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/ingest", srv.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_body");
}
