//! Per-event scoring strategies and the registry that selects them.

pub mod catalog;
pub mod chess;
pub mod medal;
pub mod registry;
pub mod rules;
pub mod strategy;

pub use registry::EventRegistry;
pub use strategy::{EventStrategy, Scoring};
