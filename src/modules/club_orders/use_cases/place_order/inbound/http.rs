use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{
    Form,
    extract::{ConnectInfo, Query, State, rejection::FormRejection},
    http::{Extensions, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::club_orders::use_cases::place_order::command::PlaceOrder;
use crate::modules::club_orders::use_cases::place_order::form::parse_articles;
use crate::modules::club_orders::use_cases::place_order::handler::ApplicationError;
use crate::modules::club_orders::use_cases::place_order::inbound::notice::Notice;
use crate::modules::club_orders::use_cases::place_order::inbound::view::render_order_page;
use crate::shell::html::error_page;
use crate::shell::state::AppState;

const CAPTCHA_FIELD: &str = "g-recaptcha-response";

#[derive(Deserialize)]
pub struct OrderPageParams {
    pub notice: Option<String>,
}

pub async fn show_form(
    State(state): State<AppState>,
    Query(params): Query<OrderPageParams>,
) -> Html<String> {
    let notice = params.notice.as_deref().and_then(Notice::from_query);
    Html(render_order_page(
        &state.catalog,
        notice,
        state.captcha_site_key.as_deref(),
    ))
}

pub async fn handle(
    State(state): State<AppState>,
    extensions: Extensions,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Response {
    let Form(fields) = match form {
        Ok(f) => f,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    if let Some(captcha) = &state.captcha {
        let remote_ip = extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());
        let token = fields.get(CAPTCHA_FIELD).map(String::as_str);
        if !captcha.verify(token, remote_ip).await {
            tracing::warn!(?remote_ip, "captcha verification failed");
            return Redirect::to(&Notice::CaptchaFailed.redirect_target()).into_response();
        }
    }

    let articles = match parse_articles(&fields, &state.catalog) {
        Ok(articles) => articles,
        Err(error) => {
            tracing::warn!(%error, "rejected order form");
            return Redirect::to(&Notice::InvalidForm.redirect_target()).into_response();
        }
    };

    let command = PlaceOrder {
        order_id: Uuid::now_v7().to_string(),
        placed_at: Utc::now(),
        buyer: fields.get("name").cloned().unwrap_or_default(),
        articles,
    };

    match state.place_order_handler.handle(command).await {
        Ok(_) => Redirect::to(&Notice::Ordered.redirect_target()).into_response(),
        Err(ApplicationError::Domain(reason)) => {
            tracing::info!(%reason, "order rejected");
            Redirect::to(&Notice::from(&reason).redirect_target()).into_response()
        }
        Err(ApplicationError::Store(error)) => {
            tracing::error!(%error, batch = %state.place_order_handler.batch(), "failed to store order");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(error_page(
                    "Die Bestellung konnte nicht gespeichert werden. Bitte später erneut versuchen.",
                )),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod place_order_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::club_orders::adapters::outbound::in_memory_aggregate_store::InMemoryAggregateStore;
    use crate::modules::club_orders::adapters::outbound::static_captcha::StaticCaptchaVerifier;
    use crate::modules::club_orders::core::aggregate::AggregateKey;
    use crate::modules::club_orders::core::catalog::{Catalog, CatalogItem};
    use crate::modules::club_orders::core::ports::{AggregateStore, CaptchaVerifier};
    use crate::shell::state::AppState;

    use super::{handle, show_form};

    fn catalog() -> Catalog {
        Catalog::new([
            (
                "Poloshirt".to_string(),
                CatalogItem {
                    default_colors: vec!["weiß".into()],
                },
            ),
            ("Cap".to_string(), CatalogItem::default()),
        ])
    }

    fn make_test_state(store: Arc<InMemoryAggregateStore>) -> AppState {
        AppState::new(catalog(), store, "pending", Vec::new())
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/", get(show_form).post(handle))
            .with_state(state)
    }

    fn post_form(body: &'static str) -> Request<Body> {
        Request::post("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn location(response: &axum::response::Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    const POLO_ORDER: &str =
        "name=Max&qty_Poloshirt=2&size_Poloshirt=M&color_Poloshirt=wei%C3%9F&pay_Poloshirt=self";

    #[tokio::test]
    async fn it_should_render_the_catalog_form() {
        let response = app(make_test_state(Arc::new(InMemoryAggregateStore::new())))
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("Vereinskleidung"));
        assert!(page.contains(r#"name="qty_Cap""#));
    }

    #[tokio::test]
    async fn it_should_render_the_notice_from_the_query() {
        let response = app(make_test_state(Arc::new(InMemoryAggregateStore::new())))
            .oneshot(
                Request::get("/?notice=empty_order")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("mindestens einen Artikel"));
    }

    #[tokio::test]
    async fn it_should_store_the_order_and_redirect_with_success() {
        let store = Arc::new(InMemoryAggregateStore::new());
        let response = app(make_test_state(store.clone()))
            .oneshot(post_form(POLO_ORDER))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/?notice=ordered");

        let aggregate = store.load("pending").await.unwrap();
        let key = AggregateKey {
            payment: "Selbstzahler".into(),
            item: "Poloshirt".into(),
            size: "M".into(),
            color: "weiß".into(),
            buyer: "Max".into(),
        };
        assert_eq!(aggregate.quantity(&key), Some(2));
    }

    #[tokio::test]
    async fn it_should_redirect_with_a_warning_when_nothing_was_ordered() {
        let store = Arc::new(InMemoryAggregateStore::new());
        let response = app(make_test_state(store.clone()))
            .oneshot(post_form("name=Max&qty_Poloshirt=0&qty_Cap="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/?notice=empty_order");
        assert_eq!(store.saved_batches().await, 0);
    }

    #[tokio::test]
    async fn it_should_redirect_with_a_warning_when_the_form_is_invalid() {
        let store = Arc::new(InMemoryAggregateStore::new());
        let response = app(make_test_state(store.clone()))
            .oneshot(post_form("name=Max&qty_Poloshirt=zwei"))
            .await
            .unwrap();

        assert_eq!(location(&response), "/?notice=invalid_form");
        assert_eq!(store.saved_batches().await, 0);
    }

    #[tokio::test]
    async fn it_should_reject_the_order_when_the_captcha_fails() {
        let store = Arc::new(InMemoryAggregateStore::new());
        let verifier = Arc::new(StaticCaptchaVerifier::rejecting()) as Arc<dyn CaptchaVerifier>;
        let state = make_test_state(store.clone()).with_captcha(verifier, Some("site".into()));

        let response = app(state).oneshot(post_form(POLO_ORDER)).await.unwrap();

        assert_eq!(location(&response), "/?notice=captcha_failed");
        assert_eq!(store.saved_batches().await, 0);
    }

    #[tokio::test]
    async fn it_should_store_the_order_when_the_captcha_passes() {
        let store = Arc::new(InMemoryAggregateStore::new());
        let verifier = Arc::new(StaticCaptchaVerifier::accepting()) as Arc<dyn CaptchaVerifier>;
        let state = make_test_state(store.clone()).with_captcha(verifier, Some("site".into()));

        let response = app(state).oneshot(post_form(POLO_ORDER)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/?notice=ordered");
        let aggregate = store.load("pending").await.unwrap();
        let key = AggregateKey {
            payment: "Selbstzahler".into(),
            item: "Poloshirt".into(),
            size: "M".into(),
            color: "weiß".into(),
            buyer: "Max".into(),
        };
        assert_eq!(aggregate.quantity(&key), Some(2));
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let mut store = InMemoryAggregateStore::new();
        store.toggle_offline();

        let response = app(make_test_state(Arc::new(store)))
            .oneshot(post_form(POLO_ORDER))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn it_should_return_422_when_the_body_is_not_a_form() {
        let response = app(make_test_state(Arc::new(InMemoryAggregateStore::new())))
            .oneshot(
                Request::post("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
