//! Endpoints for the concept registry.
//!
//! Concepts are the labels offered by the concept select of the record form. They come
//! from existing records plus any concept registered through the "Add Concept" button.
//! Registrations are removed through the JSON API only.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    app_state::lock_store,
    record::{ConceptName, RecordStore, concept_field},
};

/// The state needed for the concept endpoints.
#[derive(Debug, Clone)]
pub struct ConceptsEndpointState {
    pub record_store: Arc<Mutex<RecordStore>>,
}

impl FromRef<AppState> for ConceptsEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            record_store: state.record_store.clone(),
        }
    }
}

/// Form data sent by the "Add Concept" button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptFormData {
    pub new_concept: String,
}

/// Register a concept and return the concept field with the new concept selected.
///
/// A blank name re-renders the field with an error message and leaves the registry as is.
pub async fn create_concept_endpoint(
    State(state): State<ConceptsEndpointState>,
    Form(form_data): Form<ConceptFormData>,
) -> Response {
    let mut store = match lock_store(&state.record_store) {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    match ConceptName::new(&form_data.new_concept) {
        Ok(name) => {
            tracing::info!("Registering concept {name}");
            let selected = name.to_string();
            let concepts = store.register_concept(name);

            concept_field(&concepts, Some(&selected), None).into_response()
        }
        Err(error) => {
            let concepts = store.list_concepts();

            concept_field(&concepts, None, Some(&format!("Error: {error}"))).into_response()
        }
    }
}

/// A route handler that returns the concept registry as JSON.
pub async fn list_concepts_endpoint(
    State(state): State<ConceptsEndpointState>,
) -> Result<Json<Vec<String>>, Error> {
    let concepts = lock_store(&state.record_store)?.list_concepts();

    Ok(Json(concepts))
}

/// Remove the registration of `concept_name` and return the remaining concepts as JSON.
///
/// The concept stays listed while a record still uses it. Responds with 404 if the
/// concept was never registered with "Add Concept".
pub async fn delete_concept_endpoint(
    Path(concept_name): Path<String>,
    State(state): State<ConceptsEndpointState>,
) -> Result<Json<Vec<String>>, Error> {
    let name = ConceptName::new(&concept_name).map_err(|_| Error::NotFound)?;
    let mut store = lock_store(&state.record_store)?;

    if !store.unregister_concept(&name) {
        tracing::debug!("Tried to remove concept {name}, which was not registered");
        return Err(Error::NotFound);
    }

    tracing::info!("Removed concept registration {name}");
    Ok(Json(store.list_concepts()))
}

#[cfg(test)]
mod create_concept_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use axum_extra::extract::Form;
    use scraper::Selector;

    use crate::{
        concept::{ConceptFormData, ConceptsEndpointState, create_concept_endpoint},
        record::RecordStore,
        test_utils::{
            assert_content_type, assert_valid_html, concept_options, parse_html_fragment,
            selected_concept,
        },
    };

    fn get_state() -> ConceptsEndpointState {
        ConceptsEndpointState {
            record_store: Arc::new(Mutex::new(RecordStore::seeded())),
        }
    }

    fn form(new_concept: &str) -> Form<ConceptFormData> {
        Form(ConceptFormData {
            new_concept: new_concept.to_owned(),
        })
    }

    #[tokio::test]
    async fn registers_concept_and_selects_it() {
        let state = get_state();

        let response = create_concept_endpoint(State(state.clone()), form("  Alquiler "))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        let field = html.root_element();
        assert_eq!(
            concept_options(&field),
            vec!["Alquiler", "Compra de supermercado", "Ingreso freelance"]
        );
        assert_eq!(selected_concept(&field), Some("Alquiler"));
        assert!(
            state
                .record_store
                .lock()
                .unwrap()
                .list_concepts()
                .contains(&"Alquiler".to_owned())
        );
    }

    #[tokio::test]
    async fn blank_concept_renders_error() {
        let state = get_state();

        let response = create_concept_endpoint(State(state.clone()), form("   "))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        let error = html
            .select(&Selector::parse("p").unwrap())
            .next()
            .expect("error message missing")
            .text()
            .collect::<String>();
        assert_eq!(error.trim(), "Error: Concept cannot be empty");
        assert_eq!(state.record_store.lock().unwrap().list_concepts().len(), 2);
    }
}
