//! Domain contracts for the shopping list application.
//!
//! Everything here is plain Rust with no UI or browser dependencies, so the
//! list logic can be unit-tested natively and shared by any frontend.

pub mod domain;
