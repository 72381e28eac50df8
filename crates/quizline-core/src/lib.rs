//! Quizline Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that the question bank
//! and the quiz session depend on. It contains no presentation code.

pub mod aggregate;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod rng;
