//! Record creation page and endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
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
        RecordStore,
        form::{RecordFormData, RecordFormDefaults, parse_amount, record_form_fields},
    },
    timezone::local_today,
};

/// The state needed for the new record page.
#[derive(Debug, Clone)]
pub struct NewRecordPageState {
    /// The local timezone as a canonical timezone name, e.g. "Europe/Madrid".
    pub local_timezone: String,
    pub record_store: Arc<Mutex<RecordStore>>,
}

impl FromRef<AppState> for NewRecordPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            record_store: state.record_store.clone(),
        }
    }
}

/// The state needed for creating a record.
#[derive(Debug, Clone)]
pub struct CreateRecordEndpointState {
    pub record_store: Arc<Mutex<RecordStore>>,
}

impl FromRef<AppState> for CreateRecordEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            record_store: state.record_store.clone(),
        }
    }
}

/// Render the page for creating a record, with the date set to today.
pub async fn get_new_record_page(
    State(state): State<NewRecordPageState>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;
    let concepts = lock_store(&state.record_store)?.list_concepts();

    let form = new_record_form_view(&RecordFormDefaults::new_record(today), &concepts, "");

    Ok(new_record_view(&form).into_response())
}

/// Handle record creation form submission.
pub async fn create_record_endpoint(
    State(state): State<CreateRecordEndpointState>,
    Form(form_data): Form<RecordFormData>,
) -> Response {
    let mut store = match lock_store(&state.record_store) {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

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

            return new_record_form_view(&defaults, &concepts, &format!("Error: {error}"))
                .into_response();
        }
    };

    let record = store.create(draft);
    tracing::info!("Created record {} on {}", record.id, record.date);

    (
        HxRedirect(endpoints::RECORDS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

fn new_record_view(form: &Markup) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_RECORD_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold mb-4" { "New Record" }

            (form)
        }
    };

    base("Create Record", &[euro_input_styles()], &content)
}

fn new_record_form_view(
    defaults: &RecordFormDefaults<'_>,
    concepts: &[String],
    error_message: &str,
) -> Markup {
    let spinner = loading_spinner();

    html! {
        form
            hx-post=(endpoints::RECORDS_API)
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
                " Create Record"
            }
        }
    }
}
