//! Shopee client behavior against a local HTTP server.

mod support;

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;
use shopee_watch::adapter::outbound::shopee::{ShopeeClient, ShopeeConfig};
use shopee_watch::domain::{ProductKey, ProductSnapshot};
use shopee_watch::port::ProductCatalog;
use support::item_api::{ApiReply, ItemApi};

const KEY: ProductKey = ProductKey::new(111, 222);

fn client_for(api: &ItemApi, timeout: Duration) -> ShopeeClient {
    ShopeeClient::from_config(&ShopeeConfig {
        api_url: api.item_url(),
        site_url: "https://shopee.co.id".into(),
        timeout,
    })
}

async fn fetch(reply: ApiReply) -> Option<ProductSnapshot> {
    let api = ItemApi::spawn(reply).await;
    client_for(&api, Duration::from_secs(5)).fetch(KEY).await
}

#[tokio::test]
async fn returns_snapshot_for_listed_item() {
    let snapshot = fetch(ApiReply::Json(json!({
        "error": null,
        "data": {"itemid": 222, "shopid": 111, "name": "Widget", "stock": 10}
    })))
    .await;

    assert_eq!(
        snapshot,
        Some(ProductSnapshot {
            name: "Widget".into(),
            stock: 10,
            url: "https://shopee.co.id/product/111/222".into(),
        })
    );
}

#[tokio::test]
async fn sends_item_and_shop_ids_as_query_parameters() {
    let api = ItemApi::spawn(ApiReply::Json(json!({"data": {"name": "Widget", "stock": 1}}))).await;
    client_for(&api, Duration::from_secs(5)).fetch(KEY).await;

    let queries = api.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].get("itemid").map(String::as_str), Some("222"));
    assert_eq!(queries[0].get("shopid").map(String::as_str), Some("111"));
}

#[tokio::test]
async fn missing_name_and_stock_fall_back_to_defaults() {
    let snapshot = fetch(ApiReply::Json(json!({"data": {"itemid": 222}})))
        .await
        .expect("item present");

    assert_eq!(snapshot.name, "Produk");
    assert_eq!(snapshot.stock, 0);
}

#[tokio::test]
async fn server_error_is_absent() {
    assert_eq!(
        fetch(ApiReply::Status(StatusCode::INTERNAL_SERVER_ERROR)).await,
        None
    );
}

#[tokio::test]
async fn forbidden_is_absent() {
    assert_eq!(fetch(ApiReply::Status(StatusCode::FORBIDDEN)).await, None);
}

#[tokio::test]
async fn empty_or_null_data_is_absent() {
    assert_eq!(fetch(ApiReply::Json(json!({"data": {}}))).await, None);
    assert_eq!(fetch(ApiReply::Json(json!({"data": null}))).await, None);
    assert_eq!(fetch(ApiReply::Json(json!({"error": 4}))).await, None);
}

#[tokio::test]
async fn non_json_body_is_absent() {
    assert_eq!(
        fetch(ApiReply::Text("<html>captcha</html>")).await,
        None
    );
}

#[tokio::test]
async fn non_json_body_surfaces_as_error_from_get_item() {
    let api = ItemApi::spawn(ApiReply::Text("not json")).await;
    let result = client_for(&api, Duration::from_secs(5)).get_item(KEY).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn slow_response_times_out_as_absent() {
    let api = ItemApi::spawn(ApiReply::Delayed(
        Duration::from_secs(5),
        json!({"data": {"name": "Widget", "stock": 10}}),
    ))
    .await;

    let snapshot = client_for(&api, Duration::from_millis(200))
        .fetch(KEY)
        .await;
    assert_eq!(snapshot, None);
}

#[tokio::test]
async fn unreachable_endpoint_is_absent() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = ShopeeClient::from_config(&ShopeeConfig {
        api_url: format!("http://{addr}/api/v4/item/get"),
        timeout: Duration::from_secs(2),
        ..ShopeeConfig::default()
    });
    assert_eq!(client.fetch(KEY).await, None);
}
