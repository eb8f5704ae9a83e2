use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::endpoints;

// Links and buttons
pub const LINK_STYLE: &str = "text-emerald-700 hover:text-emerald-600 \
    dark:text-emerald-400 dark:hover:text-emerald-300 underline";

pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 rounded text-white \
    bg-emerald-600 dark:bg-emerald-700 disabled:bg-emerald-800 \
    hover:enabled:bg-emerald-700 hover:enabled:dark:bg-emerald-800";

pub const BUTTON_SECONDARY_STYLE: &str = "py-2.5 px-4 whitespace-nowrap rounded \
    text-sm font-medium text-gray-900 bg-white border border-gray-300 \
    hover:bg-emerald-50 hover:text-emerald-700 dark:bg-gray-800 \
    dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700 \
    dark:hover:text-white";

// Record form
pub const FORM_CONTAINER_STYLE: &str = "flex flex-col items-center px-6 py-8 \
    mx-auto max-w-md text-gray-900 dark:text-white";
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white bg-gray-50 dark:bg-gray-700 \
    border border-gray-300 dark:border-gray-600 dark:placeholder-gray-400 \
    focus:ring-emerald-600 focus:border-emerald-600";
pub const FORM_RADIO_GROUP_STYLE: &str = "grid grid-cols-2 sm:grid-cols-3 gap-2";
pub const FORM_RADIO_INPUT_STYLE: &str = "peer h-4 w-4 shrink-0 cursor-pointer \
    text-emerald-600 border-gray-300 dark:border-gray-600";
pub const FORM_RADIO_LABEL_STYLE: &str = "flex-1 rounded border border-gray-300 \
    dark:border-gray-600 bg-white dark:bg-gray-700 px-3 py-2 text-sm \
    text-gray-700 dark:text-white cursor-pointer hover:bg-gray-50 \
    peer-checked:border-emerald-600 peer-checked:bg-emerald-50 \
    peer-checked:text-emerald-800 peer-checked:dark:bg-emerald-600/20 \
    peer-checked:dark:text-emerald-200";

// Records table
pub const TABLE_HEADER_STYLE: &str = "text-xs uppercase text-gray-700 bg-gray-100 \
    dark:bg-gray-700 dark:text-gray-400";
pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";
pub const TABLE_CELL_STYLE: &str = "px-4 py-3";

pub const CONCEPT_BADGE_STYLE: &str = "inline-flex items-center px-2.5 py-0.5 \
    text-xs font-semibold rounded-full text-emerald-800 bg-emerald-100 \
    dark:bg-emerald-900 dark:text-emerald-300";

pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-4 py-6 mx-auto text-gray-900 dark:text-white";

const DELETE_BUTTON_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 underline cursor-pointer";

pub enum HeadElement {
    Style(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Registro" }

                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4/response-targets.js" {}

                style
                {
                    r#"
                    #indicator.htmx-indicator {
                        display: none;
                    }

                    #indicator.htmx-request .htmx-indicator {
                        display: inline;
                    }

                    #indicator.htmx-request.htmx-indicator {
                        display: inline;
                    }
                    "#
                }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::Style(text) => style { (text) }
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

/// A full page describing an HTTP error, with a link back to the records list.
pub fn error_view(status: StatusCode, description: &str, fix: &str) -> Markup {
    let title = status.canonical_reason().unwrap_or("Error");

    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="max-w-screen-sm mx-auto px-4 py-16 text-center"
            {
                h1 class="mb-4 text-7xl lg:text-9xl font-extrabold text-emerald-600 dark:text-emerald-500"
                {
                    (status.as_str())
                }

                p class="mb-4 text-3xl font-bold text-gray-900 dark:text-white" { (description) }

                p class="mb-8 text-xl text-gray-700 dark:text-gray-300" { (fix) }

                a href=(endpoints::RECORDS_VIEW) class=(BUTTON_PRIMARY_STYLE)
                {
                    "Back to Records"
                }
            }
        }
    );

    base(title, &[], &content)
}

/// Render [error_view] as a response with `status`.
pub fn error_page_response(status: StatusCode, description: &str, fix: &str) -> Response {
    (status, Html(error_view(status, description, fix).into_string())).into_response()
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="inline text-white w-4 h-4 me-2 mb-1 animate-spin"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// Returns the CSS styles for adding a euro sign prefix to number inputs.
pub fn euro_input_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(
        r#"
        .input-wrapper {
            position: relative;
            display: inline-block;
        }
        .input-wrapper input[type="number"] {
            padding-left: 1.4rem;
        }
        .input-wrapper::before {
            content: '€';
            position: absolute;
            left: 0.6rem;
            top: 50%;
            transform: translateY(-50%);
            pointer-events: none;
        }
        "#
        .to_owned(),
    ))
}

/// Format `number` rounded to cents with a euro sign, e.g. "€1,234.50" or "-€12.30".
pub fn format_currency(number: f64) -> String {
    let cents = (number * 100.0).round();
    // Amounts that round to zero, such as -0.001, have no sign.
    let sign = if cents < 0.0 { "-" } else { "" };
    let digits = format!("{:.2}", cents.abs() / 100.0);

    match digits.split_once('.') {
        Some((whole, decimals)) => format!("{sign}€{}.{decimals}", group_thousands(whole)),
        None => format!("{sign}€{digits}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Shorten `text` to at most `max_graphemes` graphemes, adding an ellipsis if it was cut.
pub fn truncate_graphemes(text: &str, max_graphemes: usize) -> String {
    let graphemes = text.graphemes(true).collect::<Vec<_>>();

    if graphemes.len() <= max_graphemes {
        text.to_owned()
    } else {
        format!("{}…", graphemes[..max_graphemes].concat())
    }
}

/// An edit link and a delete button that asks for confirmation before sending the request.
pub fn edit_delete_action_links(
    edit_url: &str,
    delete_url: &str,
    confirm_message: &str,
    hx_target: &str,
    hx_swap: &str,
) -> Markup {
    html! {
        a href=(edit_url) class=(LINK_STYLE) { "Edit" }

        button
            type="button"
            hx-delete=(delete_url)
            hx-confirm=(confirm_message)
            hx-target=(hx_target)
            hx-target-error="#alert-container"
            hx-swap=(hx_swap)
            class=(DELETE_BUTTON_STYLE)
        {
            "Delete"
        }
    }
}
