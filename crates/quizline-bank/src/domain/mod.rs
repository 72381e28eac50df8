//! Domain layer for the question bank.

pub mod bank;
pub mod question;
