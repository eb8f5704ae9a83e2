//! Record editing page and endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use maud::{Markup, html};

use crate::{
    AppState, Error,
    app_state::lock_store,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, euro_input_styles, loading_spinner},
    navigation::NavBar,
    record::{
        RecordDraft, RecordId, RecordStore,
        form::{RecordFormData, RecordFormDefaults, parse_amount, record_form_fields},
    },
    timezone::local_today,
};

/// The state needed for the edit record page.
#[derive(Debug, Clone)]
pub struct EditRecordPageState {
    /// The local timezone as a canonical timezone name, e.g. "Europe/Madrid".
    pub local_timezone: String,
    pub record_store: Arc<Mutex<RecordStore>>,
}

impl FromRef<AppState> for EditRecordPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            record_store: state.record_store.clone(),
        }
    }
}

/// The state needed for updating a record.
#[derive(Debug, Clone)]
pub struct UpdateRecordEndpointState {
    pub record_store: Arc<Mutex<RecordStore>>,
}

impl FromRef<AppState> for UpdateRecordEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            record_store: state.record_store.clone(),
        }
    }
}

/// Render the record editing page.
///
/// An unknown record ID renders an empty form with the message "Record not found".
pub async fn get_edit_record_page(
    Path(record_id): Path<RecordId>,
    State(state): State<EditRecordPageState>,
) -> Result<Response, Error> {
    let store = lock_store(&state.record_store)?;
    let concepts = store.list_concepts();

    let edit_endpoint = endpoints::format_endpoint(endpoints::EDIT_RECORD_VIEW, record_id);
    let update_endpoint = endpoints::format_endpoint(endpoints::RECORD_API, record_id);

    let view = match store.get_record(record_id) {
        Some(record) => {
            let draft = RecordDraft::from(record);
            let form = edit_record_form_view(
                &update_endpoint,
                &RecordFormDefaults::from_draft(&draft),
                &concepts,
                "",
            );

            edit_record_view(&edit_endpoint, &form)
        }
        None => {
            tracing::debug!("Tried to edit missing record {record_id}");
            let today = local_today(&state.local_timezone)?;
            let form = edit_record_form_view(
                &update_endpoint,
                &RecordFormDefaults::new_record(today),
                &concepts,
                "Record not found",
            );

            edit_record_view(&edit_endpoint, &form)
        }
    };

    Ok(view.into_response())
}

/// Handle record update form submission.
pub async fn update_record_endpoint(
    Path(record_id): Path<RecordId>,
    State(state): State<UpdateRecordEndpointState>,
    Form(form_data): Form<RecordFormData>,
) -> Response {
    let mut store = match lock_store(&state.record_store) {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    let update_endpoint = endpoints::format_endpoint(endpoints::RECORD_API, record_id);

    let draft = match form_data.clone().into_draft() {
        Ok(draft) => draft,
        Err(error) => {
            let concepts = store.list_concepts();
            let defaults = RecordFormDefaults {
                concept: None,
                amount: parse_amount(&form_data.amount).ok(),
                method: form_data.method,
                record_type: form_data.type_,
                period: form_data.period,
                ..RecordFormDefaults::new_record(form_data.date)
            };

            return edit_record_form_view(
                &update_endpoint,
                &defaults,
                &concepts,
                &format!("Error: {error}"),
            )
            .into_response();
        }
    };

    match store.update(record_id, draft) {
        Some(record) => {
            tracing::info!("Updated record {}", record.id);

            (
                HxRedirect(endpoints::RECORDS_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        None => Error::UpdateMissingRecord.into_alert_response(),
    }
}

fn edit_record_view(edit_endpoint: &str, form: &Markup) -> Markup {
    let nav_bar = NavBar::new(edit_endpoint).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold mb-4" { "Edit Record" }

            (form)
        }
    };

    base("Edit Record", &[euro_input_styles()], &content)
}

fn edit_record_form_view(
    update_endpoint: &str,
    defaults: &RecordFormDefaults<'_>,
    concepts: &[String],
    error_message: &str,
) -> Markup {
    let spinner = loading_spinner();

    html! {
        form
            hx-put=(update_endpoint)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            @if !error_message.is_empty() {
                p class="text-red-600 dark:text-red-400" { (error_message) }
            }

            (record_form_fields(defaults, concepts))

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span id="indicator" class="inline htmx-indicator" { (spinner) }
                " Update Record"
            }
        }
    }
}


#[cfg(test)]
mod update_record_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use axum_extra::extract::Form;
    use time::macros::date;

    use crate::{
        endpoints,
        record::{
            PaymentMethod, Period, RecordStore, RecordType, edit::UpdateRecordEndpointState,
            form::RecordFormData, update_record_endpoint,
        },
        test_utils::{
            assert_form_error_message, assert_hx_redirect, assert_valid_html, must_get_form,
            parse_html_fragment,
        },
    };

    fn get_state() -> UpdateRecordEndpointState {
        UpdateRecordEndpointState {
            record_store: Arc::new(Mutex::new(RecordStore::seeded())),
        }
    }

    fn form(concept: &str, amount: &str) -> RecordFormData {
        RecordFormData {
            date: date!(2025 - 01 - 06),
            concept: concept.to_owned(),
            amount: amount.to_owned(),
            method: PaymentMethod::NonCash,
            type_: RecordType::Payment,
            period: Period::Exceptional,
        }
    }

    #[tokio::test]
    async fn can_update_record() {
        let state = get_state();

        let response = update_record_endpoint(
            Path(1),
            State(state.clone()),
            Form(form("Compra de supermercado", "80")),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::RECORDS_VIEW);
        let record = state.record_store.lock().unwrap().get_record(1).unwrap();
        assert_eq!(record.amount, 80.0);
        assert_eq!(record.method, PaymentMethod::NonCash);
        assert_eq!(record.period, Period::Exceptional);
    }

    #[tokio::test]
    async fn update_missing_record_returns_not_found() {
        let state = get_state();

        let response = update_record_endpoint(
            Path(99),
            State(state.clone()),
            Form(form("Compra de supermercado", "80")),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(state.record_store.lock().unwrap().list_records().len(), 2);
    }

    #[tokio::test]
    async fn update_fails_on_empty_concept() {
        let state = get_state();

        let response = update_record_endpoint(Path(1), State(state.clone()), Form(form(" ", "1")))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_form_error_message(&form, "Error: Concept cannot be empty");
        let record = state.record_store.lock().unwrap().get_record(1).unwrap();
        assert_eq!(record.amount, 75.5);
    }

    #[tokio::test]
    async fn update_fails_on_non_numeric_amount() {
        let state = get_state();

        let response = update_record_endpoint(
            Path(1),
            State(state.clone()),
            Form(form("Compra de supermercado", "12,30")),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_form_error_message(&form, "Error: 12,30 is not a valid amount");
        let record = state.record_store.lock().unwrap().get_record(1).unwrap();
        assert_eq!(record.amount, 75.5);
    }
}
