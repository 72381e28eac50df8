//! Application layer for the quiz session.

pub mod command_handlers;
pub mod query_handlers;
