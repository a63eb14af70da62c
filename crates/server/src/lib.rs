//! HTTP adapter over `subtis-core`.

pub mod api;
pub mod metrics;
pub mod state;
