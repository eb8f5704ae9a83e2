//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get},
};

use crate::{
    AppState,
    concept::{create_concept_endpoint, delete_concept_endpoint, list_concepts_endpoint},
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    record::{
        create_record_endpoint, delete_record_endpoint, get_edit_record_page,
        get_new_record_page, get_records_page, list_records_endpoint, update_record_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::RECORDS_VIEW, get(get_records_page))
        .route(endpoints::NEW_RECORD_VIEW, get(get_new_record_page))
        .route(endpoints::EDIT_RECORD_VIEW, get(get_edit_record_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(
            endpoints::RECORDS_API,
            get(list_records_endpoint).post(create_record_endpoint),
        )
        .route(
            endpoints::RECORD_API,
            delete(delete_record_endpoint).put(update_record_endpoint),
        )
        .route(
            endpoints::CONCEPTS_API,
            get(list_concepts_endpoint).post(create_concept_endpoint),
        )
        .route(endpoints::CONCEPT_API, delete(delete_concept_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the records page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::RECORDS_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_records() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::RECORDS_VIEW);
    }
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{AppState, Record, RecordStore, build_router, endpoints};

    fn get_test_server() -> TestServer {
        let state = AppState::new(RecordStore::seeded(), "Etc/UTC");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    fn taxi_form(concept: &str) -> [(&'static str, String); 6] {
        [
            ("date", "2025-01-05".to_owned()),
            ("concept", concept.to_owned()),
            ("amount", "12.30".to_owned()),
            ("method", "cash".to_owned()),
            ("type_", "payment".to_owned()),
            ("period", "organic".to_owned()),
        ]
    }

    #[tokio::test]
    async fn serves_pages() {
        let server = get_test_server();

        for path in [endpoints::RECORDS_VIEW, endpoints::NEW_RECORD_VIEW, "/records/1/edit"] {
            server.get(path).await.assert_status_ok();
        }
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server
            .get("/does-not-exist")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn error_page_is_internal_server_error() {
        let server = get_test_server();

        server
            .get(endpoints::INTERNAL_ERROR_VIEW)
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn lists_seed_records_as_json() {
        let server = get_test_server();

        let records = server.get(endpoints::RECORDS_API).await.json::<Vec<Record>>();

        let ids = records.iter().map(|record| record.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(records[0].concept.as_ref(), "Compra de supermercado");
    }

    #[tokio::test]
    async fn created_record_gets_next_id_and_new_concept() {
        let server = get_test_server();

        let response = server
            .post(endpoints::RECORDS_API)
            .form(&taxi_form("Taxi"))
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("hx-redirect"), endpoints::RECORDS_VIEW);
        let records = server.get(endpoints::RECORDS_API).await.json::<Vec<Record>>();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].id, 3);
        assert_eq!(records[2].concept.as_ref(), "Taxi");
        let concepts = server
            .get(endpoints::CONCEPTS_API)
            .await
            .json::<Vec<String>>();
        assert_eq!(
            concepts,
            vec!["Compra de supermercado", "Ingreso freelance", "Taxi"]
        );
    }

    #[tokio::test]
    async fn deleting_only_user_of_concept_drops_it() {
        let server = get_test_server();

        server.delete("/api/records/1").await.assert_status_ok();

        let concepts = server
            .get(endpoints::CONCEPTS_API)
            .await
            .json::<Vec<String>>();
        assert_eq!(concepts, vec!["Ingreso freelance"]);
        server
            .delete("/api/records/1")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_replaces_record_in_place() {
        let server = get_test_server();

        let response = server
            .put("/api/records/1")
            .form(&taxi_form("Taxi"))
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        let records = server.get(endpoints::RECORDS_API).await.json::<Vec<Record>>();
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].concept.as_ref(), "Taxi");
        server
            .put("/api/records/42")
            .form(&taxi_form("Taxi"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn blank_amount_is_reported_in_form() {
        let server = get_test_server();
        let mut form = taxi_form("Taxi");
        form[2].1 = String::new();

        let response = server.post(endpoints::RECORDS_API).form(&form).await;

        response.assert_status_ok();
        assert!(response.text().contains("Error: Amount cannot be empty"));
        let records = server.get(endpoints::RECORDS_API).await.json::<Vec<Record>>();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn registered_concept_can_be_removed() {
        let server = get_test_server();
        server
            .post(endpoints::CONCEPTS_API)
            .form(&[("new_concept", "Cuota del gimnasio")])
            .await
            .assert_status_ok();

        let concepts = server
            .delete("/api/concepts/Cuota%20del%20gimnasio")
            .await
            .json::<Vec<String>>();

        assert_eq!(concepts, vec!["Compra de supermercado", "Ingreso freelance"]);
        server
            .delete("/api/concepts/Cuota%20del%20gimnasio")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn registered_concept_is_listed() {
        let server = get_test_server();

        server
            .post(endpoints::CONCEPTS_API)
            .form(&[("new_concept", "Alquiler")])
            .await
            .assert_status_ok();

        let concepts = server
            .get(endpoints::CONCEPTS_API)
            .await
            .json::<Vec<String>>();
        assert_eq!(
            concepts,
            vec!["Alquiler", "Compra de supermercado", "Ingreso freelance"]
        );
    }
}
