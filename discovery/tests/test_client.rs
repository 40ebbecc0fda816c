use assert_matches::assert_matches;
use chaintable_common::{ClientError, ClientOptions};
use chaintable_discovery::DiscoveryClient;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

async fn new_client(server: &MockServer) -> DiscoveryClient {
    let configuration = ClientOptions::new()
        .with_api_url(server.uri())
        .with_access_token("test-token")
        .to_configuration()
        .unwrap();
    DiscoveryClient::new(configuration)
}

#[tokio::test]
async fn test_list_schemas() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/discover/schema"))
        .and(query_param("scope", "ALL"))
        .and(query_param("searchPattern", "ETH"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[\"ETHEREUM\"]"))
        .mount(&server)
        .await;

    let client = new_client(&server).await;
    let body = client.list_schemas("ALL", Some("ETH")).await.unwrap();
    assert_eq!(body, "[\"ETHEREUM\"]");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_list_schemas_omits_search_pattern() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/discover/schema"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let client = new_client(&server).await;
    client.list_schemas("PUBLIC", None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("scope=PUBLIC"));
}

#[tokio::test]
async fn test_list_tables() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/discover/table"))
        .and(query_param("scope", "ALL"))
        .and(query_param("schema", "ETHEREUM"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[\"BLOCKS\"]"))
        .mount(&server)
        .await;

    let client = new_client(&server).await;
    let body = client
        .list_tables(Some("ETHEREUM"), "ALL", None)
        .await
        .unwrap();
    assert_eq!(body, "[\"BLOCKS\"]");
}

#[tokio::test]
async fn test_list_tables_rejects_lowercase_schema() {
    let server = MockServer::start().await;

    let client = new_client(&server).await;
    let report = client
        .list_tables(Some("ethereum"), "ALL", None)
        .await
        .unwrap_err();

    assert_matches!(report.current_context(), ClientError::Validation);
    assert!(!format!("{:?}", report).is_empty());

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_list_columns() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/discover/table/column"))
        .and(query_param("schema", "ETHEREUM"))
        .and(query_param("table", "BLOCKS"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let client = new_client(&server).await;
    client.list_columns("ETHEREUM", "BLOCKS").await.unwrap();
}

#[tokio::test]
async fn test_list_table_info_rejects_lowercase_table() {
    let server = MockServer::start().await;

    let client = new_client(&server).await;

    for result in [
        client.list_columns("ETHEREUM", "blocks").await,
        client.list_table_index("ETHEREUM", "blocks").await,
        client.list_table_primary_key("ETHEREUM", "blocks").await,
    ] {
        let report = result.unwrap_err();
        assert_matches!(report.current_context(), ClientError::Validation);
    }

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_list_table_relations() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/discover/table/relations"))
        .and(query_param("schema", "ETHEREUM"))
        .and(query_param("scope", "PRIVATE"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let client = new_client(&server).await;
    client.list_table_relations("ETHEREUM", "PRIVATE").await.unwrap();
}

#[tokio::test]
async fn test_list_key_references() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/discover/refs/primarykey"))
        .and(query_param("schema", "ETHEREUM"))
        .and(query_param("table", "BLOCKS"))
        .and(query_param("column", "BLOCK_NUMBER"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pk"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/discover/refs/foreignkey"))
        .respond_with(ResponseTemplate::new(200).set_body_string("fk"))
        .mount(&server)
        .await;

    let client = new_client(&server).await;
    let body = client
        .list_primary_key_references("ETHEREUM", "BLOCKS", "BLOCK_NUMBER")
        .await
        .unwrap();
    assert_eq!(body, "pk");

    let body = client
        .list_foreign_key_references("ETHEREUM", "TRANSACTIONS", "BLOCK_NUMBER")
        .await
        .unwrap();
    assert_eq!(body, "fk");
}

#[tokio::test]
async fn test_list_key_references_validates_every_identifier() {
    let server = MockServer::start().await;

    let client = new_client(&server).await;
    let report = client
        .list_primary_key_references("ETHEREUM", "BLOCKS", "block_number")
        .await
        .unwrap_err();
    assert_matches!(report.current_context(), ClientError::Validation);

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_list_blockchains() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/discover/blockchains"))
        .respond_with(ResponseTemplate::new(200).set_body_string("chains"))
        .mount(&server)
        .await;

    let client = new_client(&server).await;
    let body = client.list_blockchains().await.unwrap();
    assert_eq!(body, "chains");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_list_blockchain_schemas_and_information() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/discover/blockchains/1/schemas"))
        .respond_with(ResponseTemplate::new(200).set_body_string("schemas"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/discover/blockchains/1/meta"))
        .respond_with(ResponseTemplate::new(200).set_body_string("meta"))
        .mount(&server)
        .await;

    let client = new_client(&server).await;
    assert_eq!(client.list_blockchain_schemas("1").await.unwrap(), "schemas");
    assert_eq!(
        client.list_blockchain_information("1").await.unwrap(),
        "meta"
    );
}

#[tokio::test]
async fn test_list_views_without_filters_has_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/discover/views"))
        .respond_with(ResponseTemplate::new(200).set_body_string("views"))
        .mount(&server)
        .await;

    let client = new_client(&server).await;
    client.list_views(None, None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_list_views_with_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/discover/views"))
        .and(query_param("name", "foo"))
        .and(query_param("owned", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_string("views"))
        .mount(&server)
        .await;

    let client = new_client(&server).await;
    client.list_views(Some("foo"), Some(true)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("name=foo&owned=true"));
}

#[tokio::test]
async fn test_non_success_body_is_passed_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/discover/schema"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = new_client(&server).await;
    let body = client.list_schemas("ALL", None).await.unwrap();
    assert_eq!(body, "internal error");
}

#[tokio::test]
async fn test_missing_access_token_prevents_any_request() {
    let server = MockServer::start().await;

    let result = ClientOptions::new()
        .with_api_url(server.uri())
        .to_configuration();

    let report = result.unwrap_err();
    assert!(format!("{:?}", report).contains("Access token is not set"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}
