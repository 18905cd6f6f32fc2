//! DataPulse: a Data & AI maturity self-assessment product.
//!
//! The library owns the question catalog, the deterministic scoring engine,
//! and the multi-step assessment session workflow. The `services/api` crate
//! wires these into the HTTP and CLI surfaces.

pub mod catalog;
pub mod config;
pub mod error;
pub mod scoring;
pub mod session;
pub mod telemetry;
