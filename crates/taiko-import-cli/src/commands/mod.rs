//! CLI command implementations.

pub mod categories;
pub mod inspect;
pub mod process;
