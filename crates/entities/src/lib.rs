//! Core entity definitions for Bancario.
//!
//! This crate defines the data types shared across the Bancario client:
//! users and roles, sessions, and loans with their status lifecycle.

mod loan;
mod session;
mod user;

pub use loan::*;
pub use session::*;
pub use user::*;
