use axum::http::StatusCode;
use axum_test::{
    multipart::{MultipartForm, Part},
    TestServer,
};
use commerce_backend::{
    adapters::inbound::http::router::{create_router, AppState},
    config::{admin_config, project_config, vars},
    create_in_memory_app,
    domain::models::LocalFileOptions,
    AppBuilder, AppServices, CapabilityDescriptor, EnvSnapshot, ProviderRegistry,
};
use object_store::memory::InMemory;
use serde_json::{json, Value};
use std::sync::Arc;

fn server_for(services: AppServices) -> TestServer {
    let state = AppState {
        registry: services.registry,
        file_provider: services.file_provider,
        static_dir: services.static_dir,
    };

    let app = create_router(state);
    TestServer::new(app).unwrap()
}

async fn setup_test_server() -> TestServer {
    server_for(create_in_memory_app().await.unwrap())
}

fn png_part(filename: &str) -> Part {
    Part::bytes(b"\x89PNG".to_vec())
        .file_name(filename.to_string())
        .mime_type("image/png")
}

#[tokio::test]
async fn test_health_reports_file_provider() {
    let server = setup_test_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok", "file_provider": "local" }));
}

#[tokio::test]
async fn test_upload_returns_keys_and_urls() {
    let server = setup_test_server().await;

    let form = MultipartForm::new()
        .add_text("note", "ignored")
        .add_part("files", png_part("gift.png"))
        .add_part("files", png_part("card.png"));

    let response = server.post("/uploads").multipart(form).await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    let files = body["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);

    for (file, name) in files.iter().zip(["gift.png", "card.png"]) {
        let key = file["key"].as_str().unwrap();
        assert!(key.ends_with(&format!("-{}", name)));
        assert_eq!(
            file["url"],
            format!("http://localhost:9000/static/{}", key)
        );
    }
}

#[tokio::test]
async fn test_upload_without_files_is_rejected() {
    let server = setup_test_server().await;

    let form = MultipartForm::new().add_text("note", "no files here");
    let response = server.post("/uploads").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_single_and_batch() {
    let server = setup_test_server().await;

    let form = MultipartForm::new()
        .add_part("files", png_part("a.png"))
        .add_part("files", png_part("b.png"));
    let uploaded: Value = server.post("/uploads").multipart(form).await.json();
    let first = uploaded["files"][0]["key"].as_str().unwrap();
    let second = uploaded["files"][1]["key"].as_str().unwrap();

    let single = server
        .delete("/uploads")
        .json(&json!({ "fileKey": first }))
        .await;
    single.assert_status_ok();

    let batch = server
        .delete("/uploads")
        .json(&json!([{ "fileKey": first }, { "fileKey": second }]))
        .await;
    batch.assert_status_ok();
}

#[tokio::test]
async fn test_delete_with_unstorable_key_is_bad_request() {
    let server = setup_test_server().await;

    let response = server
        .delete("/uploads")
        .json(&json!({ "fileKey": "/absolute.png" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["details"]["key"], "/absolute.png");
}

#[tokio::test]
async fn test_retrieval_url_for_encoded_key() {
    let server = setup_test_server().await;
    let key = "1700000000000-summer sale.jpg";

    let response = server
        .get(&format!("/uploads/{}/url", urlencoding::encode(key)))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "key": key,
        "url": format!("http://localhost:9000/static/{}", key),
    }));
}

#[tokio::test]
async fn test_config_masks_credentials() {
    let env = EnvSnapshot::new()
        .with(vars::R2_ACCOUNT_ID, "acct")
        .with(vars::R2_ACCESS_KEY_ID, "r2-access-key")
        .with(vars::R2_SECRET_ACCESS_KEY, "r2-secret-value")
        .with(vars::R2_PUBLIC_URL, "https://cdn.example.com")
        .with(vars::STRIPE_API_KEY, "sk_test_value")
        .with(vars::STRIPE_WEBHOOK_SECRET, "whsec_value");
    let services = AppBuilder::new()
        .with_env(&env)
        .with_backend_store(Arc::new(InMemory::new()))
        .build()
        .await
        .unwrap();
    let server = server_for(services);

    let health: Value = server.get("/health").await.json();
    assert_eq!(health["file_provider"], "r2");

    let response = server.get("/config").await;
    response.assert_status_ok();

    let text = response.text();
    for secret in ["r2-access-key", "r2-secret-value", "sk_test_value", "whsec_value"] {
        assert!(!text.contains(secret), "{} leaked", secret);
    }

    let body: Value = response.json();
    let file = &body["modules"][0]["options"]["providers"][0];
    assert_eq!(file["id"], "r2");
    assert_eq!(file["options"]["public_url"], "https://cdn.example.com");
    assert_eq!(body["modules"][1]["options"]["providers"][0]["id"], "stripe");
}

#[tokio::test]
async fn test_local_uploads_are_served_at_their_url() {
    let upload_dir = tempfile::TempDir::new().unwrap();
    let env = EnvSnapshot::new();
    let registry = ProviderRegistry::new(
        project_config(&env),
        admin_config(&env),
        vec![CapabilityDescriptor::LocalFile(LocalFileOptions {
            upload_dir: Some(upload_dir.path().display().to_string()),
            backend_url: Some("http://localhost:9000/static".to_string()),
        })],
        Vec::new(),
    );
    let services = AppBuilder::new()
        .with_registry(registry)
        .build()
        .await
        .unwrap();
    assert_eq!(services.static_dir.as_deref(), Some(upload_dir.path()));
    let server = server_for(services);

    let form = MultipartForm::new().add_part("files", png_part("gift.png"));
    let uploaded: Value = server.post("/uploads").multipart(form).await.json();
    let url = uploaded["files"][0]["url"].as_str().unwrap();
    let path = url.strip_prefix("http://localhost:9000").unwrap();
    assert!(path.starts_with("/static/"));

    let response = server.get(path).await;
    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"\x89PNG");

    let missing = server.get("/static/never-uploaded.png").await;
    missing.assert_status(StatusCode::NOT_FOUND);
}
