//! Application use cases.

mod get_quote;

pub use get_quote::{GetQuoteError, GetQuoteUseCase, QuoteDto};
