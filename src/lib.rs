//! World Happiness Report dashboard.
//!
//! The library holds everything that does not need a window: the typed data
//! model, loading, filtering, aggregation, export and the session state. The
//! `happiness-dashboard` binary renders it with egui.

pub mod color;
pub mod config;
pub mod data;
pub mod state;
