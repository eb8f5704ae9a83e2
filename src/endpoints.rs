//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/records/{record_id}', use [format_endpoint].

/// The root route which redirects to the records page.
pub const ROOT: &str = "/";
/// The page for displaying all records.
pub const RECORDS_VIEW: &str = "/records";
/// The page for creating a new record.
pub const NEW_RECORD_VIEW: &str = "/records/new";
/// The page for editing an existing record.
pub const EDIT_RECORD_VIEW: &str = "/records/{record_id}/edit";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route to list records as JSON and to create records.
pub const RECORDS_API: &str = "/api/records";
/// The route to update or delete a single record.
pub const RECORD_API: &str = "/api/records/{record_id}";
/// The route to list concepts as JSON and to register new concepts.
pub const CONCEPTS_API: &str = "/api/concepts";
/// The route to remove a concept registration, e.g. `/api/concepts/Alquiler`.
pub const CONCEPT_API: &str = "/api/concepts/{concept_name}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/records/{record_id}', '{record_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
