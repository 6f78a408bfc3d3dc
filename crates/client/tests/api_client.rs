//! End-to-end client tests against a local stub backend.
//!
//! No HTTP-mock crate is used; the stub is a plain `TcpListener` serving
//! canned HTTP/1.1 responses and handing the raw request back to the test
//! for assertions on method, path, query string, and headers.

use std::net::SocketAddr;
use std::path::PathBuf;

use secrecy::SecretString;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use tienda_client::models::{Credentials, ProductFilter};
use tienda_client::{ApiClient, ApiConfig, ApiError};
use tienda_core::ProductId;

/// One canned response: status code and JSON body.
type CannedResponse = (u16, &'static str);

fn request_complete(buf: &[u8]) -> bool {
    let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let head = String::from_utf8_lossy(buf.get(..pos).unwrap_or_default());
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);
    buf.len() >= pos + 4 + content_length
}

/// Serve `responses` in order, one connection each, and forward every raw
/// request to the returned channel.
async fn spawn_stub(
    responses: Vec<CannedResponse>,
) -> (SocketAddr, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        for (status, body) in responses {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };

            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = stream.read(&mut chunk).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(chunk.get(..n).unwrap_or_default());
                if request_complete(&buf) {
                    break;
                }
            }
            let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());

            let reason = match status {
                200 => "OK",
                401 => "Unauthorized",
                404 => "Not Found",
                500 => "Internal Server Error",
                _ => "Unknown",
            };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    (addr, rx)
}

fn client_for(addr: SocketAddr) -> ApiClient {
    let config = ApiConfig::new(&format!("http://{addr}/api/v1"), PathBuf::from(".s")).unwrap();
    ApiClient::new(&config).unwrap()
}

const PRODUCT_PAGE: &str = r#"{
    "data": [{
        "idProducto": 1,
        "nombre": "Cafe molido",
        "descripcion": "500g",
        "precio": "10.00",
        "activo": true,
        "createdAt": "2026-01-02T03:04:05.000Z",
        "updatedAt": "2026-01-02T03:04:05.000Z"
    }],
    "total": 1, "page": 1, "limit": 5, "totalPages": 1
}"#;

#[tokio::test]
async fn list_products_sends_sparse_query_and_bearer_token() {
    let (addr, mut requests) = spawn_stub(vec![(200, PRODUCT_PAGE)]).await;
    let client = client_for(addr);
    client.set_token(SecretString::from("jwt-abc")).await;

    let filter = ProductFilter {
        active: Some(true),
        limit: Some(5),
        ..ProductFilter::default()
    };
    let page = client.list_products(&filter).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data.first().unwrap().id, ProductId::new(1));

    let request = requests.recv().await.unwrap();
    assert!(
        request.starts_with("GET /api/v1/productos?activo=true&limit=5 "),
        "unexpected request line: {request}"
    );
    assert!(
        request.to_lowercase().contains("authorization: bearer jwt-abc"),
        "missing bearer header: {request}"
    );
}

#[tokio::test]
async fn unauthenticated_requests_carry_no_auth_header() {
    let (addr, mut requests) = spawn_stub(vec![(200, PRODUCT_PAGE)]).await;
    let client = client_for(addr);

    client
        .list_products(&ProductFilter::default())
        .await
        .unwrap();

    let request = requests.recv().await.unwrap();
    assert!(request.starts_with("GET /api/v1/productos "));
    assert!(!request.to_lowercase().contains("authorization:"));
}

#[tokio::test]
async fn a_401_maps_to_unauthorized_without_clearing_the_token() {
    let (addr, _requests) =
        spawn_stub(vec![(401, r#"{"message":"token expirado"}"#)]).await;
    let client = client_for(addr);
    client.set_token(SecretString::from("stale")).await;

    let err = client.get_product(ProductId::new(1)).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(err.to_string().contains("token expirado"));

    // The observer only logs; the stale token must survive.
    assert!(client.has_token().await);
}

#[tokio::test]
async fn non_2xx_statuses_surface_with_the_body() {
    let (addr, _requests) = spawn_stub(vec![(500, r#"{"message":"boom"}"#)]).await;
    let client = client_for(addr);

    let err = client.get_product(ProductId::new(9)).await.unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert!(body.contains("boom"));
        }
        other => panic!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn login_installs_the_returned_token() {
    let login_body = r#"{
        "user": {
            "idUsuario": 7,
            "nombre": "Ana",
            "email": "ana@example.com",
            "estado": "activo",
            "roles": ["CLIENTE"]
        },
        "token": "jwt-fresh"
    }"#;
    let (addr, mut requests) = spawn_stub(vec![(200, login_body), (200, PRODUCT_PAGE)]).await;
    let client = client_for(addr);

    let response = client
        .login(&Credentials {
            email: "ana@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(response.user.name, "Ana");
    assert!(client.has_token().await);

    let login_request = requests.recv().await.unwrap();
    assert!(login_request.starts_with("POST /api/v1/auth/login "));
    assert!(login_request.contains(r#""email":"ana@example.com""#));

    // The fresh token now rides on every request.
    client
        .list_products(&ProductFilter::default())
        .await
        .unwrap();
    let next_request = requests.recv().await.unwrap();
    assert!(
        next_request
            .to_lowercase()
            .contains("authorization: bearer jwt-fresh")
    );
}

#[tokio::test]
async fn delete_discards_the_empty_body() {
    let (addr, mut requests) = spawn_stub(vec![(200, "")]).await;
    let client = client_for(addr);

    client.delete_product(ProductId::new(3)).await.unwrap();

    let request = requests.recv().await.unwrap();
    assert!(request.starts_with("DELETE /api/v1/productos/3 "));
}
