//! Sensor Dash - polling dashboard for temperature, humidity and vibration feeds
//!
//! This library exposes the core modules for testing and reuse.

pub mod common;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod feed;
pub mod render;
pub mod routes;
pub mod sensor;
pub mod sync;
