pub mod quote;
pub mod request;

pub use quote::{FieldName, FieldState, QuoteRequest, SubmissionStatus};
pub use request::{ApiResponse, RelayQuotePayload};
