//! Domain layer for the quiz session.

pub mod aggregates;
pub mod commands;
pub mod events;
pub mod scoring;
pub mod tiers;
