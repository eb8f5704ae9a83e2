//! Records listing page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    app_state::lock_store,
    endpoints,
    html::{
        CONCEPT_BADGE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, edit_delete_action_links, format_currency,
        truncate_graphemes,
    },
    navigation::NavBar,
    record::{Record, RecordStore},
};

/// Concepts longer than this are shortened on the narrow card layout.
const CARD_CONCEPT_MAX_GRAPHEMES: usize = 24;

const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this record?";

/// The state needed for the records listing page.
#[derive(Debug, Clone)]
pub struct RecordsPageState {
    pub record_store: Arc<Mutex<RecordStore>>,
}

impl FromRef<AppState> for RecordsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            record_store: state.record_store.clone(),
        }
    }
}

/// A record with the URLs for its row actions.
#[derive(Debug, Clone)]
struct RecordRow {
    record: Record,
    edit_url: String,
    delete_url: String,
}

/// Render every record, oldest first.
pub async fn get_records_page(State(state): State<RecordsPageState>) -> Result<Response, Error> {
    let mut records = lock_store(&state.record_store)?.list_records();
    records.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    let rows = records
        .into_iter()
        .map(|record| RecordRow {
            edit_url: endpoints::format_endpoint(endpoints::EDIT_RECORD_VIEW, record.id),
            delete_url: endpoints::format_endpoint(endpoints::RECORD_API, record.id),
            record,
        })
        .collect::<Vec<_>>();

    Ok(records_view(&rows).into_response())
}

fn records_view(rows: &[RecordRow]) -> Markup {
    let new_record_route = endpoints::NEW_RECORD_VIEW;
    let nav_bar = NavBar::new(endpoints::RECORDS_VIEW).into_html();

    let table_row = |row: &RecordRow| {
        let record = &row.record;

        html!(
            tr class=(TABLE_ROW_STYLE) data-record-row="true"
            {
                td class=(TABLE_CELL_STYLE) { (record.weekday()) }
                td class=(TABLE_CELL_STYLE) { (record.date) }
                td class=(TABLE_CELL_STYLE)
                {
                    span class=(CONCEPT_BADGE_STYLE) { (record.concept) }
                }
                td class={ (TABLE_CELL_STYLE) " text-right tabular-nums" }
                {
                    (format_currency(record.amount))
                }
                td class=(TABLE_CELL_STYLE) { (record.method.label()) }
                td class=(TABLE_CELL_STYLE) { (record.record_type.label()) }
                td class=(TABLE_CELL_STYLE) { (record.period.label()) }
                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4"
                    {
                        (edit_delete_action_links(
                            &row.edit_url,
                            &row.delete_url,
                            DELETE_CONFIRM_MESSAGE,
                            "closest tr",
                            "delete",
                        ))
                    }
                }
            }
        )
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Records" }

                    a href=(new_record_route) class=(LINK_STYLE)
                    {
                        "Create Record"
                    }
                }

                (records_cards_view(rows, new_record_route))

                section class="hidden lg:block dark:bg-gray-800 lg:max-w-5xl lg:w-full lg:mx-auto"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                @for heading in ["Day", "Date", "Concept", "Amount", "Method", "Type", "Period", "Actions"] {
                                    th scope="col" class=(TABLE_CELL_STYLE) { (heading) }
                                }
                            }
                        }

                        tbody
                        {
                            @for row in rows {
                                (table_row(row))
                            }

                            @if rows.is_empty() {
                                tr
                                {
                                    td
                                        colspan="8"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "No records yet. "
                                        a href=(new_record_route) class=(LINK_STYLE)
                                        {
                                            "Create your first record"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Records", &[], &content)
}

fn records_cards_view(rows: &[RecordRow], new_record_route: &str) -> Markup {
    html!(
        ul class="lg:hidden space-y-4"
        {
            @for row in rows {
                @let record = &row.record;

                li class="rounded border border-gray-200 bg-white px-4 py-3 shadow-sm dark:border-gray-700 dark:bg-gray-800"
                    data-record-card="true"
                {
                    div class="flex items-start justify-between gap-3"
                    {
                        span
                            class=(CONCEPT_BADGE_STYLE)
                            title=(record.concept)
                        {
                            (truncate_graphemes(record.concept.as_ref(), CARD_CONCEPT_MAX_GRAPHEMES))
                        }
                        span class="text-sm tabular-nums text-gray-900 dark:text-white"
                        {
                            (format_currency(record.amount))
                        }
                    }

                    div class="mt-1 text-xs text-gray-500 dark:text-gray-400"
                    {
                        (record.weekday()) " " (record.date)
                        " · " (record.method.label())
                        " · " (record.record_type.label())
                        " · " (record.period.label())
                    }

                    div class="mt-2 flex items-center gap-4 text-sm"
                    {
                        (edit_delete_action_links(
                            &row.edit_url,
                            &row.delete_url,
                            DELETE_CONFIRM_MESSAGE,
                            "closest [data-record-card='true']",
                            "outerHTML",
                        ))
                    }
                }
            }

            @if rows.is_empty() {
                li class="rounded border border-dashed border-gray-300 bg-white px-4 py-6 text-center text-sm text-gray-500 dark:border-gray-700 dark:bg-gray-800 dark:text-gray-400"
                {
                    "No records yet. "
                    a href=(new_record_route) class=(LINK_STYLE)
                    {
                        "Create your first record"
                    }
                }
            }
        }
    )
}
