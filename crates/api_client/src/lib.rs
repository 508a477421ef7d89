//! Loan lifecycle client for the Bancario backend.
//!
//! The [`LendingApi`] trait is the seam between the client core and the
//! backend: [`HttpLendingApi`] implements it over HTTP, and tests
//! substitute an in-memory fake. Callers map failures to user-visible
//! messages with [`ClientError::user_message`].

mod api;
mod error;
mod http;
mod requests;

pub use api::*;
pub use error::*;
pub use http::*;
pub use requests::*;
