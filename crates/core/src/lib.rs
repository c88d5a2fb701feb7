//! Core library: configuration and the suggestion expansion engine.

pub mod config;
pub mod engine;
pub mod registry;
