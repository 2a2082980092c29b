// Drives the full router against a YAML store in a temporary directory.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::modules::club_orders::adapters::outbound::in_memory_notifier::InMemoryNotifier;
use crate::modules::club_orders::adapters::outbound::yaml_aggregate_store::YamlAggregateStore;
use crate::modules::club_orders::core::catalog::{Catalog, CatalogItem};
use crate::modules::club_orders::core::ports::OrderNotifier;
use crate::shell::http::router;
use crate::shell::state::AppState;

const POLO_ORDER: &str =
    "name=Max&qty_Poloshirt=2&size_Poloshirt=M&color_Poloshirt=wei%C3%9F&pay_Poloshirt=self";

type BeforeEachReturn = (TempDir, Arc<InMemoryNotifier>, Router);

#[fixture]
fn before_each() -> BeforeEachReturn {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::new([
        (
            "Poloshirt".to_string(),
            CatalogItem {
                default_colors: vec!["weiß".into(), "rot".into()],
            },
        ),
        ("Cap".to_string(), CatalogItem::default()),
    ]);
    let notifier = Arc::new(InMemoryNotifier::new());
    let notifiers = vec![notifier.clone() as Arc<dyn OrderNotifier>];
    let store = Arc::new(YamlAggregateStore::new(dir.path()));
    let app = router(AppState::new(catalog, store, "pending", notifiers));
    (dir, notifier, app)
}

fn batch_file(dir: &TempDir) -> PathBuf {
    dir.path().join("pending.yml")
}

fn post_form(body: &'static str) -> Request<Body> {
    Request::post("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn read_batch(dir: &TempDir) -> serde_yaml::Value {
    let raw = tokio::fs::read_to_string(batch_file(dir)).await.unwrap();
    serde_yaml::from_str(&raw).unwrap()
}

#[rstest]
#[tokio::test]
async fn it_should_sum_repeated_orders_in_the_batch_file(before_each: BeforeEachReturn) {
    let (dir, notifier, app) = before_each;

    for _ in 0..2 {
        let response = app.clone().oneshot(post_form(POLO_ORDER)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let batch = read_batch(&dir).await;
    assert_eq!(
        batch["Selbstzahler"]["Poloshirt"]["M"]["weiß"]["Max"].as_u64(),
        Some(4)
    );
    assert_eq!(notifier.notified.lock().await.len(), 2);
}

#[rstest]
#[tokio::test]
async fn it_should_store_custom_items_with_defaults(before_each: BeforeEachReturn) {
    let (dir, _, app) = before_each;

    let response = app
        .oneshot(post_form(
            "name=Lisa+K%C3%A4ufer&c_item_0=Vereinsschal&c_qty_0=1&c_color_0=&c_size_0=&c_pay_0=club",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let batch = read_batch(&dir).await;
    assert_eq!(
        batch["Vereinskosten"]["Vereinsschal"]["–"]["Standard"]["Lisa Käufer"].as_u64(),
        Some(1)
    );
}

#[rstest]
#[tokio::test]
async fn it_should_not_create_the_batch_file_for_an_empty_order(before_each: BeforeEachReturn) {
    let (dir, notifier, app) = before_each;

    let response = app.oneshot(post_form("name=Max&qty_Poloshirt=0")).await.unwrap();

    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/?notice=empty_order"
    );
    assert!(!batch_file(&dir).exists());
    assert!(notifier.notified.lock().await.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_show_a_single_order_as_one_overview_row(before_each: BeforeEachReturn) {
    let (_dir, _, app) = before_each;

    app.clone().oneshot(post_form(POLO_ORDER)).await.unwrap();
    let response = app
        .oneshot(Request::get("/overview").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(page.matches("<tr><td>").count(), 1);
    assert!(page.contains("<td>Max</td><td>2</td>"));
}

#[rstest]
#[tokio::test]
async fn it_should_not_lose_concurrent_orders(before_each: BeforeEachReturn) {
    let (dir, _, app) = before_each;

    let submissions = (0..8).map(|_| app.clone().oneshot(post_form(POLO_ORDER)));
    for response in spawn_all(submissions).await {
        assert_eq!(response.unwrap().status(), StatusCode::SEE_OTHER);
    }

    let batch = read_batch(&dir).await;
    assert_eq!(
        batch["Selbstzahler"]["Poloshirt"]["M"]["weiß"]["Max"].as_u64(),
        Some(16)
    );
}

async fn spawn_all<F, T>(futures: impl Iterator<Item = F>) -> Vec<T>
where
    F: std::future::Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handles: Vec<_> = futures.map(tokio::spawn).collect();
    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    results
}
