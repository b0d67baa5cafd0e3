//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    transaction::{
        clear_transactions_endpoint, create_transaction_endpoint, delete_transaction_endpoint,
        get_transactions_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::CLEAR_TRANSACTIONS,
            post(clear_transactions_endpoint),
        )
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}


#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use scraper::{Html, Selector};

    use crate::{AppState, endpoints, routing::build_router};

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection, "Etc/UTC").unwrap();
        let app = build_router(state);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    fn list_item_ids(text: &str) -> Vec<String> {
        let html = Html::parse_document(text);
        html.select(&Selector::parse("#transaction-list li").unwrap())
            .filter_map(|item| item.value().attr("data-transaction-id"))
            .map(str::to_owned)
            .collect()
    }

    #[tokio::test]
    async fn add_then_view_transactions() {
        let server = get_test_server();

        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[("label", "Salary"), ("amount", "100"), ("date", "")])
            .await
            .assert_header("hx-redirect", endpoints::DASHBOARD_VIEW);
        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[("label", "Food"), ("amount", "-15"), ("date", "2025-10-16")])
            .await
            .assert_header("hx-redirect", endpoints::DASHBOARD_VIEW);

        let response = server.get(endpoints::TRANSACTIONS_VIEW).await;

        response.assert_status_ok();
        assert_eq!(list_item_ids(&response.text()), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn invalid_form_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[("label", ""), ("amount", "5")])
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_text_contains("Please add a label for the transaction");
    }

    #[tokio::test]
    async fn delete_removes_transaction_from_list() {
        let server = get_test_server();
        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[("label", "Coffee"), ("amount", "-4.5")])
            .await;
        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[("label", "Tea"), ("amount", "-3")])
            .await;

        let response = server
            .delete(&endpoints::format_endpoint(endpoints::TRANSACTION, 1))
            .await;
        response.assert_status_ok();
        response.assert_header("hx-refresh", "true");

        let response = server.get(endpoints::TRANSACTIONS_VIEW).await;
        assert_eq!(list_item_ids(&response.text()), vec!["2"]);
    }

    #[tokio::test]
    async fn clear_route_is_not_shadowed_by_delete_route() {
        let server = get_test_server();
        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[("label", "Coffee"), ("amount", "-4.5")])
            .await;

        let response = server.post(endpoints::CLEAR_TRANSACTIONS).await;

        response.assert_status_ok();
        response.assert_text_contains("Deleted 1 transaction(s).");
        let response = server.get(endpoints::TRANSACTIONS_VIEW).await;
        assert!(list_item_ids(&response.text()).is_empty());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        let response = server.get("/does-not-exist").await;

        response.assert_status_not_found();
    }
}
