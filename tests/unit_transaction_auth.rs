use mockito::Server;
use q2bank::utils::transaction_auth::TransactionAuthClient;
use q2bank_config::TransactionAuthConfig;
use q2bank_core::ErrorKind;
use serde_json::json;

fn client_for(url: String) -> TransactionAuthClient {
    TransactionAuthClient::new(&TransactionAuthConfig { url })
}

#[tokio::test]
async fn test_authorized() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/authorize")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"authorization": true}).to_string())
        .create_async()
        .await;

    let client = client_for(format!("{}/authorize", server.url()));
    let authorized = client.get_transaction_auth().await.unwrap();

    assert!(authorized);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_not_authorized() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/authorize")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"authorization": false}).to_string())
        .create_async()
        .await;

    let client = client_for(format!("{}/authorize", server.url()));

    assert!(!client.get_transaction_auth().await.unwrap());
}

#[tokio::test]
async fn test_body_decoded_on_error_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/authorize")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(json!({"authorization": false}).to_string())
        .create_async()
        .await;

    let client = client_for(format!("{}/authorize", server.url()));

    assert!(!client.get_transaction_auth().await.unwrap());
}

#[tokio::test]
async fn test_malformed_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/authorize")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = client_for(format!("{}/authorize", server.url()));
    let err = client.get_transaction_auth().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Internal);
    assert_eq!(
        err.error.to_string(),
        "error getting transaction authorization"
    );
}

#[tokio::test]
async fn test_missing_authorization_field() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/authorize")
        .with_status(200)
        .with_body(json!({"status": "ok"}).to_string())
        .create_async()
        .await;

    let client = client_for(format!("{}/authorize", server.url()));

    assert!(client.get_transaction_auth().await.is_err());
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    let client = client_for("http://127.0.0.1:1/authorize".to_string());
    let err = client.get_transaction_auth().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Internal);
    assert_eq!(err.message(), "internal server error");
}
