//! Financial records and the store that owns them.

mod api;
mod create;
mod delete;
mod domain;
mod edit;
mod form;
mod list;
mod seed;
mod store;

pub use api::list_records_endpoint;
pub use create::{create_record_endpoint, get_new_record_page};
pub use delete::delete_record_endpoint;
pub use domain::{ConceptName, PaymentMethod, Period, Record, RecordDraft, RecordId, RecordType};
pub use edit::{get_edit_record_page, update_record_endpoint};
pub use form::concept_field;
pub use list::get_records_page;
pub use seed::{load_seed_csv, parse_seed_csv};
pub use store::RecordStore;
