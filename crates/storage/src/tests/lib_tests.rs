use super::*;
use chrono::Utc;

fn jane() -> NewInquiry {
    NewInquiry::new("Jane Doe", "jane@example.com", "Interested in services")
}

#[tokio::test]
async fn sqlite_store_returns_populated_inquiry() {
    let store = SqliteInquiryStore::new("sqlite::memory:").await.expect("db");
    let before = Utc::now();
    let inquiry = store.create_inquiry(jane()).await.expect("insert");

    assert!(inquiry.id.0 > 0);
    assert_eq!(inquiry.name, "Jane Doe");
    assert_eq!(inquiry.email, "jane@example.com");
    assert_eq!(inquiry.message, "Interested in services");
    assert!(inquiry.created_at >= before);
}

#[tokio::test]
async fn sqlite_store_never_reuses_ids() {
    let store = SqliteInquiryStore::new("sqlite::memory:").await.expect("db");
    let first = store.create_inquiry(jane()).await.expect("first");
    let second = store.create_inquiry(jane()).await.expect("second");
    assert!(second.id > first.id);
}

#[tokio::test]
async fn sqlite_store_appends_exactly_one_row() {
    let store = SqliteInquiryStore::new("sqlite::memory:").await.expect("db");
    store.create_inquiry(jane()).await.expect("insert");
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inquiries")
        .fetch_one(store.pool())
        .await
        .expect("count");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn closed_pool_reports_unavailable() {
    let store = SqliteInquiryStore::new("sqlite::memory:").await.expect("db");
    store.pool().close().await;

    let err = store.create_inquiry(jane()).await.expect_err("closed");
    assert!(err.is_unavailable(), "unexpected error: {err}");
    assert!(store.health_check().await.is_err());
}

#[tokio::test]
async fn health_check_succeeds_for_live_pool() {
    let store = SqliteInquiryStore::new("sqlite::memory:").await.expect("db");
    store.health_check().await.expect("health check");
}

#[tokio::test]
async fn creates_database_file_when_missing() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("nested").join("inquiries.db");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    let store = SqliteInquiryStore::new(&database_url).await.expect("db");
    store.create_inquiry(jane()).await.expect("insert");
    store.pool().close().await;

    assert!(
        db_path.exists(),
        "database file should exist: {}",
        db_path.display()
    );
}

#[tokio::test]
async fn mock_store_echoes_fields_with_clock_id() {
    let store = MockInquiryStore::new();
    let before = Utc::now();
    let inquiry = store.create_inquiry(jane()).await.expect("mock insert");

    assert!(inquiry.id.0 >= before.timestamp_millis());
    assert!(inquiry.created_at >= before);
    assert_eq!(inquiry.id.0, inquiry.created_at.timestamp_millis());
    assert_eq!(store.submitted().await, vec![inquiry]);
    assert_eq!(store.mode(), StoreMode::Mock);
}

#[tokio::test]
async fn select_store_without_url_is_mock() {
    let store = select_store(None).await.expect("mock");
    assert_eq!(store.mode(), StoreMode::Mock);

    let blank = select_store(Some("   ")).await.expect("mock");
    assert_eq!(blank.mode(), StoreMode::Mock);
}

#[tokio::test]
async fn select_store_with_url_is_database() {
    let store = select_store(Some("sqlite::memory:")).await.expect("db");
    assert_eq!(store.mode(), StoreMode::Database);
    store.health_check().await.expect("healthy");
}

#[tokio::test]
async fn unreachable_database_fails_per_call_and_recovers() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let blocker = temp_root.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").expect("blocker file");
    let database_url = format!(
        "sqlite://{}",
        blocker.join("site.db").to_string_lossy().replace('\\', "/")
    );

    let store = select_store(Some(&database_url)).await.expect("selected");
    assert_eq!(store.mode(), StoreMode::Database);

    let err = store.create_inquiry(jane()).await.expect_err("no parent dir");
    assert!(err.is_unavailable(), "unexpected error: {err}");
    let err = store.health_check().await.expect_err("unhealthy");
    assert!(err.is_unavailable(), "unexpected error: {err}");

    std::fs::remove_file(&blocker).expect("remove blocker");
    let inquiry = store.create_inquiry(jane()).await.expect("recovered");
    assert!(inquiry.id.0 > 0);
}
