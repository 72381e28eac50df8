//! Application layer for the question bank.

pub mod defaults;
pub mod loader;
