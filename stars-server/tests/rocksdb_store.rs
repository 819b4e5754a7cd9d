//! On-disk store smoke test

use serde_json::json;
use stars_server::{Config, ServerState};

#[tokio::test]
async fn rocksdb_backend_stores_and_reads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stars.db");
    let mut config = Config::in_memory();
    config.database_url = format!("rocksdb://{}", path.display());

    let state = ServerState::initialize(&config).await.unwrap();
    let person = json!({"id": "p1", "name": "A", "branchCode": "01"});
    state
        .people()
        .create(person.as_object().cloned().unwrap())
        .await
        .unwrap();

    assert_eq!(state.people().get("p1").await.unwrap()["name"], json!("A"));
    assert!(path.exists());
}
