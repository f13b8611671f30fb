//! Integration tests for `DirectoryClient` using wiremock HTTP mocks.

use gourmet_core::Coordinate;
use gourmet_directory::{DirectoryClient, DirectoryError, PhotoGallery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORIGIN: Coordinate = Coordinate {
    longitude: 135.5023,
    latitude: 34.6937,
};

fn test_client(server: &MockServer) -> DirectoryClient {
    DirectoryClient::with_base_urls(
        "test-key",
        5,
        "gourmet-test/0.1",
        &format!("{}/gourmet/v1/", server.uri()),
        &format!("{}/photos", server.uri()),
    )
    .expect("client construction should not fail")
    .with_concurrency(2)
}

fn shop_xml(id: &str, name: &str) -> String {
    format!(
        "<shop><id>{id}</id><name>{name}</name><lat>34.67</lat><lng>135.50</lng>\
         <budget><code>B001</code><name>1000円</name></budget><catch>{name} catch</catch></shop>"
    )
}

fn results_xml(shops: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <results xmlns=\"http://webservice.recruit.co.jp/HotPepper/\">\
         <results_available>{n}</results_available>\
         <results_returned>{n}</results_returned>\
         <results_start>1</results_start>{body}</results>",
        n = shops.len(),
        body = shops.concat()
    )
}

fn xml_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/xml")
}

async fn mount_search(server: &MockServer, keyword: &str, body: String) {
    Mock::given(method("GET"))
        .and(path("/gourmet/v1/"))
        .and(query_param("key", "test-key"))
        .and(query_param("keyword", keyword))
        .and(query_param("count", "10"))
        .respond_with(xml_response(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn search_attaches_single_and_multiple_gallery_images() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "たこやき",
        results_xml(&[shop_xml("J000000011", "一番"), shop_xml("J000000022", "二番")]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/photos/11/J000000011.xml"))
        .respond_with(xml_response(
            "<photoSlide><items><item><photo>https://img.example/11.jpg</photo></item></items></photoSlide>"
                .to_string(),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/photos/22/J000000022.xml"))
        .respond_with(xml_response(
            "<photoSlide><items>\
             <item><photo>https://img.example/22a.jpg</photo></item>\
             <item><photo>https://img.example/22b.jpg</photo></item>\
             </items></photoSlide>"
                .to_string(),
        ))
        .mount(&server)
        .await;

    let stores = test_client(&server)
        .search(ORIGIN, 1, "たこやき")
        .await
        .expect("search should succeed");

    assert_eq!(stores.len(), 2);
    assert_eq!(stores[0].id, "J000000011");
    assert_eq!(stores[0].images, vec!["https://img.example/11.jpg"]);
    assert_eq!(stores[1].id, "J000000022");
    assert_eq!(
        stores[1].images,
        vec!["https://img.example/22a.jpg", "https://img.example/22b.jpg"]
    );
    assert_eq!(stores[1].catch, "二番 catch");
    assert_eq!(stores[1].budget, "1000円");
}

#[tokio::test]
async fn failed_gallery_leaves_store_without_images() {
    let server = MockServer::start().await;
    mount_search(&server, "餃子", results_xml(&[shop_xml("J000000033", "三番")])).await;

    Mock::given(method("GET"))
        .and(path("/photos/33/J000000033.xml"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let stores = test_client(&server)
        .search(ORIGIN, 1, "餃子")
        .await
        .expect("gallery failure must not fail the search");

    assert_eq!(stores.len(), 1);
    assert!(stores[0].images.is_empty());
}

#[tokio::test]
async fn malformed_gallery_is_reported_as_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos/44/J000000044.xml"))
        .respond_with(xml_response("<photoSlide><items></photoSlide>".to_string()))
        .mount(&server)
        .await;

    let gallery = test_client(&server).fetch_gallery("J000000044").await;
    assert!(matches!(gallery, PhotoGallery::Unavailable { .. }));
}

#[tokio::test]
async fn zero_results_skips_gallery_requests() {
    let server = MockServer::start().await;
    mount_search(&server, "うどん", results_xml(&[])).await;

    Mock::given(method("GET"))
        .and(path("/photos/00/J000000000.xml"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let stores = test_client(&server)
        .search(ORIGIN, 1, "うどん")
        .await
        .expect("empty search should succeed");
    assert!(stores.is_empty());
}

#[tokio::test]
async fn search_passes_start_offset_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gourmet/v1/"))
        .and(query_param("start", "21"))
        .and(query_param("lng", "135.5023"))
        .and(query_param("lat", "34.6937"))
        .respond_with(xml_response(results_xml(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let listings = test_client(&server)
        .search_listings(ORIGIN, 21, "そば")
        .await
        .expect("search should succeed");
    assert!(listings.is_empty());
}

#[tokio::test]
async fn upstream_server_error_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gourmet/v1/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .search(ORIGIN, 1, "ラーメン")
        .await
        .expect_err("500 should fail the search");
    assert!(matches!(err, DirectoryError::Http(_)));
}

#[tokio::test]
async fn api_error_document_is_surfaced() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "ラーメン",
        "<results><error><message>bad key</message><code>2000</code></error></results>"
            .to_string(),
    )
    .await;

    let err = test_client(&server)
        .search(ORIGIN, 1, "ラーメン")
        .await
        .expect_err("api error should fail the search");
    assert!(matches!(err, DirectoryError::Api { ref code, .. } if code == "2000"));
}
