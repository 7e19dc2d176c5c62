//! Command handlers.
//!
//! Handlers are thin: they take their dependencies from the
//! [`CliContext`](crate::CliContext), call into the library crates and write
//! the result to the supplied output. No business logic lives here.

pub mod convert;
pub mod deck;
pub mod figures;
pub mod specs;
pub mod tables;
pub mod tools;
