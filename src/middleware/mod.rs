pub mod error_handler;
pub mod request_id;

pub use error_handler::{form_error_handler, json_error_handler, ErrorHandler};
pub use request_id::{RequestId, RequestIdValue, REQUEST_ID_HEADER};
