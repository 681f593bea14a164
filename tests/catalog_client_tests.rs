use serde_json::{json, Value};
use catalog_stats::errors::CatalogStatsError;
use catalog_stats::services::catalog_client::CatalogClient;
use catalog_stats::traits::catalog_source::CatalogSource;
use crate::support::{CatalogServer, Route, CATEGORY_TREE_JSON, PRODUCTS_JSON, PRODUCTS_PATH, TREE_PATH};

#[test]
fn test_fetch_category_tree() {
    let server = CatalogServer::start(vec![Route::ok(TREE_PATH, CATEGORY_TREE_JSON)]);
    let client = CatalogClient::new(server.catalog_config()).unwrap();

    let tree = client.fetch_category_tree().unwrap();

    let names: Vec<&str> = tree.sub_categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Bageri", "Mejeri", "Frukt & Grönt"]);
    assert_eq!(tree.sub_categories[0].id, "1469");
    assert_eq!(tree.sub_categories[0].count, 574);
    assert_eq!(tree.sub_categories[2].id, "1600");
    assert_eq!(server.requests().len(), 1);
    assert!(server.requests()[0].starts_with(TREE_PATH));
}

#[test]
fn test_fetch_category_products_sends_category_id() {
    let server = CatalogServer::start(vec![Route::ok(PRODUCTS_PATH, PRODUCTS_JSON)]);
    let client = CatalogClient::new(server.catalog_config()).unwrap();

    let products = client.fetch_category_products("123").unwrap();

    let expected: Value = serde_json::from_str(PRODUCTS_JSON).unwrap();
    assert_eq!(serde_json::to_value(&products).unwrap(), expected);
    assert_eq!(server.requests(), vec![format!("{PRODUCTS_PATH}?categoryId=123")]);
}

#[test]
fn test_non_success_status_is_transport_error() {
    let server = CatalogServer::start(vec![Route::status(TREE_PATH, 503, "{}")]);
    let client = CatalogClient::new(server.catalog_config()).unwrap();

    match client.fetch_category_tree() {
        Err(CatalogStatsError::Transport { status_code, url, .. }) => {
            assert_eq!(status_code, Some(503));
            assert!(url.unwrap().ends_with(TREE_PATH));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn test_invalid_json_is_decode_error() {
    let server = CatalogServer::start(vec![Route::ok(PRODUCTS_PATH, "<html>maintenance</html>")]);
    let client = CatalogClient::new(server.catalog_config()).unwrap();

    let result = client.fetch_category_products("1469");

    assert!(matches!(result, Err(CatalogStatsError::Decode { .. })));
}

#[test]
fn test_missing_key_is_decode_error() {
    let body = json!([{"id": 1, "soldCount": 4}]).to_string();
    let server = CatalogServer::start(vec![Route::ok(PRODUCTS_PATH, body)]);
    let client = CatalogClient::new(server.catalog_config()).unwrap();

    let result = client.fetch_category_products("1469");

    assert!(matches!(result, Err(CatalogStatsError::Decode { .. })));
}

#[test]
fn test_unreachable_host_is_transport_error() {
    let mut config = CatalogServer::start(Vec::new()).catalog_config();
    config.category_tree_url = "http://127.0.0.1:1/api/product/getCategoryTree".to_string();
    let client = CatalogClient::new(config).unwrap();

    let result = client.fetch_category_tree();

    assert!(matches!(result, Err(CatalogStatsError::Transport { status_code: None, .. })));
}

#[test]
fn test_tree_without_root_fields() {
    let body = json!({"subCategories": [{"id": "1469", "name": "Bageri", "count": 574}]}).to_string();
    let server = CatalogServer::start(vec![Route::ok(TREE_PATH, body)]);
    let client = CatalogClient::new(server.catalog_config()).unwrap();

    let tree = client.fetch_category_tree().unwrap();

    assert_eq!(tree.sub_categories.len(), 1);
    assert_eq!(tree.sub_categories[0].name, "Bageri");
    assert_eq!(tree.sub_categories[0].count, 574);
}

#[test]
fn test_tree_with_incomplete_grandchild() {
    let body = json!({
        "subCategories": [{
            "id": "1469",
            "name": "Bageri",
            "count": 574,
            "subCategories": [{"id": "1470", "name": "Bröd"}]
        }]
    })
    .to_string();
    let server = CatalogServer::start(vec![Route::ok(TREE_PATH, body)]);
    let client = CatalogClient::new(server.catalog_config()).unwrap();

    let tree = client.fetch_category_tree().unwrap();

    assert_eq!(tree.sub_categories.len(), 1);
    assert_eq!(tree.sub_categories[0].id, "1469");
}

#[test]
fn test_top_level_category_without_count_is_decode_error() {
    let body = json!({"subCategories": [{"id": "1469", "name": "Bageri"}]}).to_string();
    let server = CatalogServer::start(vec![Route::ok(TREE_PATH, body)]);
    let client = CatalogClient::new(server.catalog_config()).unwrap();

    let result = client.fetch_category_tree();

    assert!(matches!(result, Err(CatalogStatsError::Decode { .. })));
}

#[test]
fn test_products_without_id_are_accepted() {
    let body = json!([
        {"soldCount": 4, "countryOfOrigin": "SE"},
        {"id": 2, "soldCount": 1, "countryOfOrigin": "DE"}
    ])
    .to_string();
    let server = CatalogServer::start(vec![Route::ok(PRODUCTS_PATH, body)]);
    let client = CatalogClient::new(server.catalog_config()).unwrap();

    let products = client.fetch_category_products("1469").unwrap();

    assert_eq!(products.len(), 2);
    assert!(products[0].id.is_null());
    assert_eq!(products[1].id, json!(2));
}
