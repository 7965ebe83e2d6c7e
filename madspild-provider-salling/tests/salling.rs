//! Integration tests for the Salling Group provider using wiremock HTTP mocks.

use madspild_core::model::{Brand, StoreId};
use madspild_core::ports::{FoodWastePort, PortError, StoreDirectoryPort};
use madspild_provider_salling::{SallingFoodWastePort, SallingStoreDirectoryPort};
use reqwest::Client;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn directory_port(base_url: &str) -> SallingStoreDirectoryPort {
    SallingStoreDirectoryPort::with_base_url(Client::new(), "test-key", base_url)
}

fn food_waste_port(base_url: &str) -> SallingFoodWastePort {
    SallingFoodWastePort::with_base_url(Client::new(), "test-key", base_url)
}

fn listing_body() -> serde_json::Value {
    serde_json::json!({
        "store": {
            "address": {
                "city": "Aalborg Øst",
                "country": "DK",
                "extra": null,
                "street": "Humlebakken 4",
                "zip": "9220"
            },
            "brand": "netto",
            "coordinates": [9.960327, 57.03699],
            "hours": [
                {
                    "date": "2026-08-30",
                    "type": "store",
                    "open": "08:00:00",
                    "close": "21:00:00",
                    "closed": false,
                    "customerFlow": [0.0, 3.0, 18.0, 42.0]
                }
            ],
            "name": "Netto Humlebakken",
            "id": "netto-h4",
            "type": "store"
        },
        "clearances": [
            {
                "offer": {
                    "currency": "DKK",
                    "discount": 12.5,
                    "ean": "5700000000002",
                    "endTime": "2026-09-01T21:59:00Z",
                    "lastUpdate": "2026-08-29T07:12:00Z",
                    "newPrice": 12.5,
                    "originalPrice": 25.0,
                    "percentDiscount": 50.0,
                    "startTime": "2026-08-29T00:00:00Z",
                    "stock": 4.0,
                    "stockUnit": "each"
                },
                "product": {
                    "description": "Økologisk mælk",
                    "ean": "5700000000002",
                    "image": null
                }
            }
        ]
    })
}

#[tokio::test]
async fn store_search_keeps_only_allow_listed_brands() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        { "id": "1", "name": "Føtex Aalborg", "brand": "foetex" },
        { "id": "2", "name": "Irma City", "brand": "irma" }
    ]);

    Mock::given(method("GET"))
        .and(path("/v2/stores/"))
        .and(query_param("fields", "id,name,brand"))
        .and(query_param("per_page", "20"))
        .and(query_param("zip", "9220"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let port = directory_port(&server.uri());
    let stores = port.search("9220").await.expect("should parse directory");

    assert_eq!(stores.len(), 1, "the irma store must be dropped");
    let store = stores.first().expect("one store remains");
    assert_eq!(store.id, StoreId("1".to_owned()));
    assert_eq!(store.name, "Føtex Aalborg");
    assert_eq!(store.brand, Brand::Foetex);
}

#[tokio::test]
async fn store_search_fails_on_invalid_shape() {
    let server = MockServer::start().await;

    // "name" missing entirely
    let body = serde_json::json!([
        { "id": "1", "brand": "foetex" }
    ]);

    Mock::given(method("GET"))
        .and(path("/v2/stores/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let port = directory_port(&server.uri());
    let err = port.search("9220").await.expect_err("shape mismatch must fail");

    assert!(
        matches!(err, PortError::Decode { .. }),
        "expected a decode error, got: {err}"
    );
    let msg = err.to_string();
    assert!(
        msg.contains("store directory") && msg.contains("name"),
        "error should name the operation and the missing field, got: {msg}"
    );
}

#[tokio::test]
async fn food_waste_lookup_decodes_full_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/food-waste/netto-h4"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&listing_body()))
        .mount(&server)
        .await;

    let port = food_waste_port(&server.uri());
    let listing = port
        .clearances(&StoreId("netto-h4".to_owned()))
        .await
        .expect("should parse listing");

    assert_eq!(listing.store.name, "Netto Humlebakken");
    assert_eq!(listing.store.brand, "netto");
    assert_eq!(listing.store.address.zip, "9220");
    assert_eq!(listing.store.address.extra, None);
    assert_eq!(listing.store.hours.len(), 1);

    assert_eq!(listing.clearances.len(), 1);
    let clearance = listing.clearances.first().expect("one clearance");
    assert_eq!(clearance.offer.ean, "5700000000002");
    assert_eq!(clearance.product.ean, clearance.offer.ean);
    assert!(clearance.offer.new_price <= clearance.offer.original_price);

    let expected_end: chrono::DateTime<chrono::Utc> =
        "2026-09-01T21:59:00Z".parse().expect("valid rfc3339");
    assert_eq!(clearance.offer.end_time, expected_end);
}

#[tokio::test]
async fn food_waste_lookup_fails_on_missing_ean() {
    let server = MockServer::start().await;

    let mut body = listing_body();
    let offer = body
        .pointer_mut("/clearances/0/offer")
        .and_then(serde_json::Value::as_object_mut)
        .expect("fixture has an offer object");
    offer.remove("ean");

    Mock::given(method("GET"))
        .and(path("/v1/food-waste/netto-h4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let port = food_waste_port(&server.uri());
    let err = port
        .clearances(&StoreId("netto-h4".to_owned()))
        .await
        .expect_err("missing field must fail");

    assert!(
        matches!(err, PortError::Decode { .. }),
        "expected a decode error, got: {err}"
    );
    assert!(
        err.to_string().contains("ean"),
        "error should name the missing field, got: {err}"
    );
}

#[tokio::test]
async fn upstream_error_status_surfaces_as_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/food-waste/netto-h4"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let port = food_waste_port(&server.uri());
    let err = port
        .clearances(&StoreId("netto-h4".to_owned()))
        .await
        .expect_err("server error must fail");

    assert!(
        matches!(err, PortError::Network(_)),
        "expected a network error, got: {err}"
    );
}
