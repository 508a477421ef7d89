//! Headless client core for the Bancario lending platform.
//!
//! A UI shell embeds this crate: the shell owns rendering and URL routing
//! and calls into the session manager and view controllers defined here.
//! Everything behavioral lives on this side of the seam — field
//! validation, the session lifecycle, route admission, and the
//! refetch-after-write list controllers. All network access goes through
//! the `api_client` crate.

pub mod admission;
pub mod config;
pub mod navigation;
pub mod services;
pub mod storage;

pub use services::AppState;

#[cfg(test)]
mod testing;
